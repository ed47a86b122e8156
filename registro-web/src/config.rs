//! Page configuration read from the document

use registro_core::PageConfig;
use web_sys::Document;

/// `<body>` attribute holding JSON overrides of [`PageConfig`]
const CONFIG_ATTR: &str = "data-config";

/// Defaults, overridden by `<body data-config="…">` when present.
///
/// A malformed document is logged and ignored.
pub fn read_page_config(document: &Document) -> PageConfig {
    let Some(raw) = document.body().and_then(|body| body.get_attribute(CONFIG_ATTR)) else {
        return PageConfig::default();
    };
    PageConfig::from_json(&raw).unwrap_or_else(|e| {
        log::error!("Ignoring {CONFIG_ATTR}: {e}");
        PageConfig::default()
    })
}

/// `lang` attribute of `<html>`, if set.
pub fn document_lang(document: &Document) -> Option<String> {
    document
        .document_element()
        .and_then(|html| html.get_attribute("lang"))
        .filter(|lang| !lang.is_empty())
}
