// src/templates/index.rs
use super::{html_escape, render_page};
use crate::content::site::{HERO_FEATURES, HERO_SUBTITLE, HERO_TITLE};
use crate::context::Visitor;
use crate::i18n::t;
use crate::models::MAX_DISPLAY_NAME_LEN;

pub fn render(visitor: &Visitor) -> String {
    let lang = visitor.lang;

    let features: String = HERO_FEATURES
        .iter()
        .map(|f| {
            format!(
                r#"
            <div class="feature">
                <span class="feature-icon">{}</span>
                <h3>{}</h3>
                <p>{}</p>
            </div>"#,
                f.icon,
                f.title.get(lang),
                f.body.get(lang)
            )
        })
        .collect();

    let name_block = if visitor.display_name.is_set() {
        format!(
            r#"
        <div class="welcome-back">
            <p>{} <strong>{}</strong>!</p>
            <a href="/tracks" class="btn btn-primary">{}</a>
        </div>"#,
            t(lang, "Welcome back,", "Karibu tena,"),
            html_escape(visitor.display_name.get()),
            t(lang, "Continue learning", "Endelea kujifunza")
        )
    } else {
        String::new()
    };

    let content = format!(
        r#"
    <div class="hero">
        <h1 class="hero-title">{}</h1>
        <p class="hero-subtitle">{}</p>
        {}
        <form class="name-form" method="POST" action="/name">
            <label for="name">{}</label>
            <input type="text" id="name" name="name" required maxlength="{}" autocomplete="given-name" value="{}">
            <button type="submit" class="btn btn-primary">{}</button>
        </form>

        <div class="hero-features">{}
        </div>
    </div>
    "#,
        HERO_TITLE.get(lang),
        HERO_SUBTITLE.get(lang),
        name_block,
        t(lang, "What should we call you?", "Tukuite nani?"),
        MAX_DISPLAY_NAME_LEN,
        html_escape(visitor.display_name.get()),
        t(lang, "Start learning", "Anza kujifunza"),
        features
    );

    render_page(visitor, t(lang, "Home", "Nyumbani"), &content)
}
