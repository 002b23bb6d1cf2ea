// src/storage/client.rs
//! Client-held persistence. Every entry lives in a browser cookie; the
//! server keeps nothing between requests. `CookieJar` percent-encodes
//! values on the way out and decodes them on the way in.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{engine::general_purpose, Engine as _};
use time::Duration as TimeDuration;

use crate::i18n::{Lang, LANG_COOKIE};
use crate::wizard::WizardState;

pub const DISPLAY_NAME_COOKIE: &str = "display_name";
pub const WIZARD_COOKIE: &str = "wizard";

#[derive(Debug, Clone)]
pub struct ClientStore {
    max_age: TimeDuration,
}

impl ClientStore {
    pub fn new(max_age_days: i64) -> Self {
        Self {
            max_age: TimeDuration::days(max_age_days),
        }
    }

    fn cookie(&self, name: &'static str, value: String) -> Cookie<'static> {
        Cookie::build((name, value))
            .path("/")
            .max_age(self.max_age)
            .same_site(SameSite::Lax)
            .http_only(true)
            .build()
    }

    fn expired(name: &'static str) -> Cookie<'static> {
        Cookie::build((name, ""))
            .path("/")
            .max_age(TimeDuration::seconds(0))
            .build()
    }

    pub fn save_display_name(&self, jar: CookieJar, name: &str) -> CookieJar {
        jar.add(self.cookie(DISPLAY_NAME_COOKIE, name.to_string()))
    }

    /// Writes the whole wizard state as a single cookie.
    pub fn save_wizard(&self, jar: CookieJar, state: &WizardState) -> CookieJar {
        match encode_wizard(state) {
            Some(value) => jar.add(self.cookie(WIZARD_COOKIE, value)),
            None => jar,
        }
    }

    pub fn clear_wizard(&self, jar: CookieJar) -> CookieJar {
        jar.add(Self::expired(WIZARD_COOKIE))
    }

    pub fn lang_cookie(&self, lang: Lang) -> Cookie<'static> {
        self.cookie(LANG_COOKIE, lang.code().to_string())
    }
}

/// Stored display name, or an empty string when unset.
pub fn read_display_name(jar: &CookieJar) -> String {
    jar.get(DISPLAY_NAME_COOKIE)
        .map(|c| c.value().to_string())
        .unwrap_or_default()
}

/// Stored wizard state. Absent or unreadable cookies yield an empty wizard.
pub fn read_wizard(jar: &CookieJar) -> WizardState {
    jar.get(WIZARD_COOKIE)
        .and_then(|c| decode_wizard(c.value()))
        .unwrap_or_default()
}

pub fn read_lang(jar: &CookieJar) -> Option<Lang> {
    jar.get(LANG_COOKIE).and_then(|c| Lang::parse(c.value()))
}

pub fn encode_wizard(state: &WizardState) -> Option<String> {
    match serde_json::to_vec(state) {
        Ok(json) => Some(general_purpose::URL_SAFE_NO_PAD.encode(json)),
        Err(e) => {
            tracing::error!("Failed to serialize wizard state: {}", e);
            None
        }
    }
}

pub fn decode_wizard(value: &str) -> Option<WizardState> {
    let bytes = general_purpose::URL_SAFE_NO_PAD.decode(value).ok()?;
    match serde_json::from_slice(&bytes) {
        Ok(state) => Some(state),
        Err(e) => {
            tracing::warn!("Discarding unreadable wizard cookie: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::selection::{Chain, NetworkType, Provider};
    use crate::wizard::{Selection, WizardStep};

    #[test]
    fn test_wizard_survives_cookie_storage() {
        let mut state = WizardState::default();
        state.record_selection(Selection::Provider(Provider::Alchemy));
        state.build_snippet(WizardStep::Provider).unwrap();
        state.record_selection(Selection::Chains {
            chains: vec![Chain::Ethereum, Chain::Polygon],
            network: NetworkType::Mainnet,
        });

        let store = ClientStore::new(30);
        let jar = store.save_wizard(CookieJar::new(), &state);
        assert_eq!(read_wizard(&jar), state);
    }

    #[test]
    fn test_corrupt_wizard_cookie_reads_as_empty() {
        let jar = CookieJar::new().add(Cookie::new(WIZARD_COOKIE, "not-base64!!"));
        assert_eq!(read_wizard(&jar), WizardState::default());
        assert_eq!(read_wizard(&CookieJar::new()), WizardState::default());
    }

    #[test]
    fn test_display_name_with_spaces_and_accents() {
        let store = ClientStore::new(30);
        let jar = store.save_display_name(CookieJar::new(), "Amani Wanjirũ");
        assert_eq!(read_display_name(&jar), "Amani Wanjirũ");
        assert_eq!(read_display_name(&CookieJar::new()), "");
    }
}
