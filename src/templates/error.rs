// src/templates/error.rs
use super::{html_escape, render_page};
use crate::context::Visitor;
use crate::i18n::t;

pub fn render_not_found(visitor: &Visitor) -> String {
    let lang = visitor.lang;
    let content = format!(
        r#"
        <div class="error-container">
            <h1>404</h1>
            <div class="error-message">
                <p>{} <code>{}</code></p>
            </div>
            <div style="text-align: center; margin-top: 2rem;">
                <a href="/" class="btn btn-primary">{}</a>
                <a href="/tracks" class="btn btn-secondary">{}</a>
            </div>
        </div>
        "#,
        t(lang, "We couldn't find", "Hatukuweza kupata"),
        html_escape(&visitor.location.path),
        t(lang, "Go home", "Rudi nyumbani"),
        t(lang, "Browse tracks", "Angalia njia za kujifunza"),
    );
    render_page(visitor, t(lang, "Page not found", "Ukurasa haukupatikana"), &content)
}
