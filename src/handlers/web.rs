// src/handlers/web.rs
use axum::{extract::State, http::StatusCode, response::Html};
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::content::starknet;
use crate::context::Visitor;
use crate::templates;
use crate::AppState;

pub async fn index(visitor: Visitor) -> Html<String> {
    Html(templates::index::render(&visitor))
}

pub async fn tracks(visitor: Visitor) -> Html<String> {
    Html(templates::tracks::render(&visitor))
}

pub async fn about(State(state): State<Arc<AppState>>, visitor: Visitor) -> Html<String> {
    let lang = visitor.lang;
    let content = state
        .page_cache
        .get_or_render("/about", lang, || async move { templates::about::content(lang) })
        .await;
    Html(templates::about::render(&visitor, &content))
}

pub async fn starknet(State(state): State<Arc<AppState>>, visitor: Visitor) -> Html<String> {
    let lang = visitor.lang;
    let content = state
        .page_cache
        .get_or_render("/starknet", lang, || async move { templates::starknet::content(lang) })
        .await;
    Html(templates::starknet::render(&visitor, &content))
}

pub async fn wallets(State(state): State<Arc<AppState>>, visitor: Visitor) -> Html<String> {
    let lang = visitor.lang;
    let content = state
        .page_cache
        .get_or_render("/wallets", lang, || async move { templates::wallets::content(lang) })
        .await;
    Html(templates::wallets::render(&visitor, &content))
}

pub async fn podcasts(State(state): State<Arc<AppState>>, visitor: Visitor) -> Html<String> {
    let lang = visitor.lang;
    let content = state
        .page_cache
        .get_or_render("/podcasts", lang, || async move { templates::media::podcasts_content(lang) })
        .await;
    Html(templates::media::render_podcasts(&visitor, &content))
}

pub async fn articles(State(state): State<Arc<AppState>>, visitor: Visitor) -> Html<String> {
    let lang = visitor.lang;
    let content = state
        .page_cache
        .get_or_render("/articles", lang, || async move { templates::media::articles_content(lang) })
        .await;
    Html(templates::media::render_articles(&visitor, &content))
}

pub async fn community(State(state): State<Arc<AppState>>, visitor: Visitor) -> Html<String> {
    let lang = visitor.lang;
    let content = state
        .page_cache
        .get_or_render("/community", lang, || async move { templates::media::community_content(lang) })
        .await;
    Html(templates::media::render_community(&visitor, &content))
}

/// Flipped cards come from `?flipped=0,2`; unknown indices are ignored.
pub fn parse_flipped(raw: Option<&str>, card_count: usize) -> BTreeSet<usize> {
    raw.unwrap_or_default()
        .split(',')
        .filter_map(|part| part.trim().parse::<usize>().ok())
        .filter(|i| *i < card_count)
        .collect()
}

pub async fn cards(visitor: Visitor) -> Html<String> {
    let flipped = parse_flipped(visitor.location.param("flipped"), starknet::FLIP_CARDS.len());
    Html(templates::cards::render(&visitor, &flipped))
}

/// Quiz answers arrive as `?q0=1&q1=0…`. They are graded only when
/// `check` is present; otherwise they are just shown as selected.
pub async fn quiz(visitor: Visitor) -> Html<String> {
    let answers: Vec<Option<usize>> = (0..starknet::QUIZ.len())
        .map(|i| {
            visitor
                .location
                .param(&format!("q{}", i))
                .and_then(|v| v.parse().ok())
        })
        .collect();

    let report = if visitor.location.param("check").is_some() {
        Some(starknet::grade(starknet::QUIZ, &answers))
    } else {
        None
    };

    if let Some(report) = &report {
        tracing::debug!("Quiz graded: {}/{}", report.score, report.total());
    }

    Html(templates::quiz::render(&visitor, &answers, report.as_ref()))
}

pub async fn not_found(visitor: Visitor) -> (StatusCode, Html<String>) {
    tracing::debug!("No route for {}", visitor.location.path);
    (
        StatusCode::NOT_FOUND,
        Html(templates::error::render_not_found(&visitor)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flipped_ignores_junk() {
        let flipped = parse_flipped(Some("0, 2,x,99,2"), 5);
        assert_eq!(flipped.into_iter().collect::<Vec<_>>(), vec![0, 2]);
        assert!(parse_flipped(None, 5).is_empty());
    }
}
