// src/templates/starknet.rs
use super::{markdown, render_page};
use crate::content::starknet::SECTIONS;
use crate::context::Visitor;
use crate::i18n::{t, Lang};

pub fn content(lang: Lang) -> String {
    let sections: String = SECTIONS
        .iter()
        .map(|s| {
            format!(
                r#"
    <div class="docs-section">
        <h2>{} {}</h2>
        {}
    </div>"#,
                s.icon,
                s.title.get(lang),
                markdown(s.body.get(lang))
            )
        })
        .collect();

    format!(
        r#"
    <h1>⚡ {}</h1>
    <p class="lead">{}</p>
    {}
    <div class="section cta-section">
        <h2>{}</h2>
        <div class="cta-buttons">
            <a href="/starknet/cards" class="btn btn-secondary">🃏 {}</a>
            <a href="/starknet/quiz" class="btn btn-primary">❓ {}</a>
        </div>
    </div>
    "#,
        t(lang, "StarkNet basics", "Misingi ya StarkNet"),
        t(
            lang,
            "The ideas you need before writing your first Cairo contract.",
            "Mawazo unayohitaji kabla ya kuandika mkataba wako wa kwanza wa Cairo."
        ),
        sections,
        t(lang, "Test yourself", "Jipime"),
        t(lang, "Flip-cards", "Kadi za kugeuza"),
        t(lang, "Take the quiz", "Fanya jaribio"),
    )
}

pub fn render(visitor: &Visitor, content: &str) -> String {
    render_page(visitor, "StarkNet", content)
}
