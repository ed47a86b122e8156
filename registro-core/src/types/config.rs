//! 页面配置

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::i18n::Language;

/// Page configuration
///
/// Every field is optional in the serialized form; missing fields take the
/// defaults below, which match the stock registration page markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Id of the registration `<form>`
    pub form_id: String,
    /// Id of the list container
    pub list_id: String,
    /// Id of the total-count element
    pub count_id: String,
    /// API origin; `None` means the page's own origin
    pub api_base_url: Option<String>,
    /// UI language; `None` means "derive from the document"
    pub language: Option<Language>,
    /// `log` level name (`off`, `error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            form_id: "registroForm".to_string(),
            list_id: "estudiantesList".to_string(),
            count_id: "totalCount".to_string(),
            api_base_url: None,
            language: None,
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON override document on top of the defaults.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        serde_json::from_str(json).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Configured log level, falling back to `Info` on unknown names.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            log::warn!("Unknown log level '{}', using info", self.log_level);
            LevelFilter::Info
        })
    }

    /// UI language: the configured one, else the document's `lang`, else Spanish.
    pub fn resolve_language(&self, document_lang: Option<&str>) -> Language {
        self.language
            .or_else(|| document_lang.and_then(Language::from_code))
            .unwrap_or_default()
    }
}
