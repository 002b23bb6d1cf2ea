// src/middleware/language.rs
use axum::{
    extract::{Query, Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

use crate::i18n::Lang;
use crate::storage::client::ClientStore;

#[derive(Debug, Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

/// Remembers a `?lang=` choice by writing the language cookie.
pub async fn persist_language(
    State(store): State<ClientStore>,
    request: Request,
    next: Next,
) -> Response {
    let chosen = Query::<LangQuery>::try_from_uri(request.uri())
        .ok()
        .and_then(|Query(q)| q.lang)
        .and_then(|code| Lang::parse(&code));

    let mut response = next.run(request).await;

    if let Some(lang) = chosen {
        let cookie = store.lang_cookie(lang).to_string();
        match HeaderValue::from_str(&cookie) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::warn!("Could not set language cookie: {}", e),
        }
    }

    response
}
