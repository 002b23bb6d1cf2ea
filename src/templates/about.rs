// src/templates/about.rs
use super::render_page;
use crate::content::site::ABOUT;
use crate::context::Visitor;
use crate::i18n::{t, Lang};

/// Page body. Depends only on the language, so it can be cached.
pub fn content(lang: Lang) -> String {
    let sections: String = ABOUT
        .iter()
        .map(|s| {
            format!(
                r#"
    <div class="section">
        <h2>{} {}</h2>
        <p>{}</p>
    </div>"#,
                s.icon,
                s.title.get(lang),
                s.body.get(lang)
            )
        })
        .collect();

    format!(
        r#"
    <h1>ℹ️ {}</h1>
    {}
    <div class="section cta-section">
        <a href="/join" class="btn btn-primary">{}</a>
    </div>
    "#,
        t(lang, "About Jifunze", "Kuhusu Jifunze"),
        sections,
        t(lang, "Get in touch", "Wasiliana nasi")
    )
}

pub fn render(visitor: &Visitor, content: &str) -> String {
    render_page(visitor, t(visitor.lang, "About", "Kuhusu"), content)
}
