// src/i18n.rs
use serde::{Deserialize, Serialize};

pub const LANG_COOKIE: &str = "lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Sw,
}

impl Lang {
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "sw" => Some(Lang::Sw),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Sw => "sw",
        }
    }

    /// The language the toggle switches to.
    pub fn other(self) -> Self {
        match self {
            Lang::En => Lang::Sw,
            Lang::Sw => Lang::En,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Sw => "Kiswahili",
        }
    }
}

/// A string available in both site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text {
    pub en: &'static str,
    pub sw: &'static str,
}

impl Text {
    pub const fn new(en: &'static str, sw: &'static str) -> Self {
        Self { en, sw }
    }

    pub fn get(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.en,
            Lang::Sw => self.sw,
        }
    }
}

/// Shorthand for picking between two inline strings.
pub fn t(lang: Lang, en: &'static str, sw: &'static str) -> &'static str {
    Text::new(en, sw).get(lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lang_codes() {
        assert_eq!(Lang::parse("sw"), Some(Lang::Sw));
        assert_eq!(Lang::parse(" EN "), Some(Lang::En));
        assert_eq!(Lang::parse("fr"), None);
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Lang::En.other(), Lang::Sw);
        assert_eq!(Lang::En.other().other(), Lang::En);
    }

    #[test]
    fn test_text_selects_language() {
        let text = Text::new("Welcome", "Karibu");
        assert_eq!(text.get(Lang::En), "Welcome");
        assert_eq!(text.get(Lang::Sw), "Karibu");
    }
}
