// src/templates/cards.rs
use std::collections::BTreeSet;

use super::render_page;
use crate::content::starknet::FLIP_CARDS;
use crate::context::Visitor;
use crate::i18n::t;

/// Query value for the flipped set with `index` toggled.
pub fn toggled(flipped: &BTreeSet<usize>, index: usize) -> String {
    let mut next = flipped.clone();
    if !next.remove(&index) {
        next.insert(index);
    }
    next.iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn render(visitor: &Visitor, flipped: &BTreeSet<usize>) -> String {
    let lang = visitor.lang;

    let cards: String = FLIP_CARDS
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let class = if flipped.contains(&i) { "flip-card flipped" } else { "flip-card" };
            format!(
                r#"
        <a href="/starknet/cards?flipped={}#card-{}" class="{}" id="card-{}">
            <div class="flip-card-inner">
                <div class="flip-card-front"><h3>{}</h3></div>
                <div class="flip-card-back"><p>{}</p></div>
            </div>
        </a>"#,
                urlencoding::encode(&toggled(flipped, i)),
                i,
                class,
                i,
                card.front.get(lang),
                card.back.get(lang)
            )
        })
        .collect();

    let content = format!(
        r#"
    <h1>🃏 {}</h1>
    <p class="lead">{}</p>
    <div class="card-grid">{}
    </div>
    <div class="section cta-section">
        <a href="/starknet/cards" class="btn btn-secondary">{}</a>
        <a href="/starknet/quiz" class="btn btn-primary">{}</a>
    </div>
    "#,
        t(lang, "StarkNet flip-cards", "Kadi za StarkNet"),
        t(lang, "Tap a card to see its meaning.", "Gusa kadi kuona maana yake."),
        cards,
        t(lang, "Reset cards", "Geuza kadi zote"),
        t(lang, "Ready for the quiz?", "Uko tayari kwa jaribio?"),
    );

    render_page(visitor, t(lang, "Flip-cards", "Kadi za kugeuza"), &content)
}
