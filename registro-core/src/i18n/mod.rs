//! 国际化（i18n）模块
//!
//! Every user-visible string of the page lives in a [`Translations`] table,
//! one constant per locale. Tables are plain structs, so a missing text is a
//! compile error rather than a blank label.

mod en_us;
mod es_es;
pub mod keys;

use serde::{Deserialize, Serialize};

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    /// Spanish, the language the server writes its messages in
    #[default]
    #[serde(rename = "es-ES", alias = "es")]
    EsEs,
    /// English (United States)
    #[serde(rename = "en-US", alias = "en")]
    EnUs,
}

impl Language {
    /// BCP 47 code
    pub fn code(self) -> &'static str {
        match self {
            Language::EsEs => "es-ES",
            Language::EnUs => "en-US",
        }
    }

    /// Parse a BCP 47 tag; only the primary subtag matters (`es-MX` → Spanish).
    pub fn from_code(code: &str) -> Option<Language> {
        let primary = code.split(['-', '_']).next()?.to_ascii_lowercase();
        match primary.as_str() {
            "es" => Some(Language::EsEs),
            "en" => Some(Language::EnUs),
            _ => None,
        }
    }

    /// Text table of this language
    pub fn texts(self) -> &'static Translations {
        match self {
            Language::EsEs => &es_es::TRANSLATIONS,
            Language::EnUs => &en_us::TRANSLATIONS,
        }
    }
}
