//! Result banner and blocking dialogs

use registro_core::types::{Banner, BANNER_ATTR};
use registro_core::{CoreError, CoreResult, Notifier};
use web_sys::{Document, Element, Window};

use super::dom_error;

pub struct DomNotifier {
    window: Window,
    document: Document,
    /// Banners are inserted as this element's first child
    container: Element,
}

impl DomNotifier {
    /// Banners go to the form's closest `<section>`, else its parent, else `<body>`.
    pub fn new(window: Window, document: Document, form: &Element) -> CoreResult<Self> {
        let container = form
            .closest("section")
            .map_err(dom_error)?
            .or_else(|| form.parent_element())
            .or_else(|| document.body().map(Element::from))
            .ok_or_else(|| CoreError::MissingElement("banner container".to_string()))?;

        Ok(Self {
            window,
            document,
            container,
        })
    }

    fn insert_banner(&self, banner: &Banner) -> CoreResult<()> {
        let element = self.document.create_element("div").map_err(dom_error)?;
        element.set_attribute(BANNER_ATTR, "true").map_err(dom_error)?;
        element.set_class_name(&banner.class_name());
        // text only; server messages are never parsed as markup
        element.set_text_content(Some(&banner.text));

        let first = self.container.first_child();
        self.container
            .insert_before(&element, first.as_ref())
            .map_err(dom_error)?;
        Ok(())
    }
}

impl Notifier for DomNotifier {
    fn show_banner(&self, banner: &Banner) {
        self.clear_banner();
        if let Err(e) = self.insert_banner(banner) {
            log::error!("Showing banner failed: {e}");
        }
    }

    fn clear_banner(&self) {
        if let Ok(Some(previous)) = self.container.query_selector(&format!("[{BANNER_ATTR}]")) {
            previous.remove();
        }
    }

    fn alert(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::error!("Alert failed: {e:?}");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or_else(|e| {
            log::error!("Confirm failed: {e:?}");
            false
        })
    }
}
