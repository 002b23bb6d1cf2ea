// src/templates/join.rs
use super::{html_escape, render_page};
use crate::context::Visitor;
use crate::i18n::t;
use crate::models::{MAX_CONTACT_NAME_LEN, MAX_MESSAGE_LEN};

/// Values to refill after a rejected submission.
#[derive(Debug, Default)]
pub struct ContactDraft<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

pub fn render(visitor: &Visitor, draft: &ContactDraft<'_>, error: Option<&str>) -> String {
    let lang = visitor.lang;

    let error_html = match error {
        Some(msg) => format!(
            r#"<div class="error-message"><p>⚠️ {}</p></div>"#,
            html_escape(msg)
        ),
        None => String::new(),
    };

    // Prefill the name from the greeting if the visitor gave one.
    let name = if draft.name.is_empty() {
        visitor.display_name.get()
    } else {
        draft.name
    };

    let content = format!(
        r#"
    <div class="auth-container">
        <h1>✉️ {}</h1>
        <p>{}</p>
        {}
        <form class="auth-form" method="POST" action="/join">
            <div class="form-group">
                <label for="name">{}</label>
                <input type="text" id="name" name="name" required maxlength="{}" value="{}">
            </div>
            <div class="form-group">
                <label for="email">{}</label>
                <input type="email" id="email" name="email" required value="{}">
            </div>
            <div class="form-group">
                <label for="message">{}</label>
                <textarea id="message" name="message" rows="6" required maxlength="{}">{}</textarea>
            </div>
            <button type="submit" class="btn btn-primary btn-full">{}</button>
        </form>
        <p class="auth-footer">{}</p>
    </div>
    "#,
        t(lang, "Join us", "Jiunge nasi"),
        t(
            lang,
            "Want to volunteer, translate or just say hello? Send us a note.",
            "Unataka kujitolea, kutafsiri au kusalimia tu? Tutumie ujumbe."
        ),
        error_html,
        t(lang, "Your name", "Jina lako"),
        MAX_CONTACT_NAME_LEN,
        html_escape(name),
        t(lang, "Email", "Barua pepe"),
        html_escape(draft.email),
        t(lang, "Message", "Ujumbe"),
        MAX_MESSAGE_LEN,
        html_escape(draft.message),
        t(lang, "Send", "Tuma"),
        t(
            lang,
            "This opens your email app with the message ready to send.",
            "Hii itafungua programu yako ya barua pepe ujumbe ukiwa tayari kutumwa."
        ),
    );

    render_page(visitor, t(lang, "Join", "Jiunge"), &content)
}
