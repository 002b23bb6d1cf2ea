// src/context.rs
//! Per-request application state handed to every page renderer.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;
use std::convert::Infallible;

use crate::i18n::Lang;
use crate::storage::client;
use crate::utils::validation::trim_display_name;

/// The visitor's chosen display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Stores the trimmed name. Blank input leaves the current value alone
    /// and returns `false`.
    pub fn set(&mut self, name: &str) -> bool {
        match trim_display_name(name) {
            Some(name) => {
                self.0 = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Current name, or `""` when unset.
    pub fn get(&self) -> &str {
        &self.0
    }

    pub fn is_set(&self) -> bool {
        !self.0.is_empty()
    }
}

/// Current path plus query, used to build links that keep page state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Location {
    pub fn new(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            path: path.into(),
            query,
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Same page, same query, with only `lang` swapped.
    pub fn with_lang(&self, lang: Lang) -> String {
        let mut pairs: Vec<String> = self
            .query
            .iter()
            .filter(|(k, _)| k != "lang")
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        pairs.push(format!("lang={}", lang.code()));
        format!("{}?{}", self.path, pairs.join("&"))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Visitor {
    pub lang: Lang,
    pub display_name: DisplayName,
    pub location: Location,
}

impl Visitor {
    pub fn from_jar(jar: &CookieJar, location: Location) -> Self {
        let lang = location
            .param("lang")
            .and_then(Lang::parse)
            .or_else(|| client::read_lang(jar))
            .unwrap_or_default();

        Self {
            lang,
            display_name: DisplayName::new(client::read_display_name(jar)),
            location,
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Visitor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state).await?;
        let query = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        let location = Location::new(parts.uri.path(), query);

        Ok(Visitor::from_jar(&jar, location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::client::ClientStore;

    #[test]
    fn test_display_name_set_and_get() {
        let mut name = DisplayName::default();
        assert_eq!(name.get(), "");
        assert!(name.set("  Imani "));
        assert_eq!(name.get(), "Imani");
    }

    #[test]
    fn test_display_name_round_trips_inner_spaces() {
        let mut name = DisplayName::default();
        assert!(name.set(" Mary  Ann "));
        assert_eq!(name.get(), "Mary  Ann");
    }

    #[test]
    fn test_blank_display_name_is_noop() {
        let mut name = DisplayName::new("Imani");
        assert!(!name.set("   "));
        assert_eq!(name.get(), "Imani");
    }

    #[test]
    fn test_lang_toggle_keeps_page_state() {
        let location = Location::new(
            "/starknet/cards",
            vec![
                ("flipped".to_string(), "0,2".to_string()),
                ("lang".to_string(), "en".to_string()),
            ],
        );
        assert_eq!(
            location.with_lang(Lang::Sw),
            "/starknet/cards?flipped=0%2C2&lang=sw"
        );
    }

    #[test]
    fn test_query_lang_overrides_cookie() {
        let jar = CookieJar::new().add(ClientStore::new(1).lang_cookie(Lang::En));
        let location = Location::new("/", vec![("lang".to_string(), "sw".to_string())]);
        assert_eq!(Visitor::from_jar(&jar, location).lang, Lang::Sw);

        let visitor = Visitor::from_jar(&jar, Location::new("/", Vec::new()));
        assert_eq!(visitor.lang, Lang::En);
    }
}
