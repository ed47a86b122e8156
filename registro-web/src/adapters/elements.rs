use registro_core::{CountIndicator, ListContainer};
use web_sys::Element;

/// List container; a page without one simply shows no list
pub struct DomListContainer {
    element: Option<Element>,
}

impl DomListContainer {
    pub fn new(element: Option<Element>) -> Self {
        Self { element }
    }
}

impl ListContainer for DomListContainer {
    fn set_html(&self, html: &str) {
        if let Some(element) = &self.element {
            element.set_inner_html(html);
        }
    }
}

/// Total-count element, optional like the list
pub struct DomCountIndicator {
    element: Option<Element>,
}

impl DomCountIndicator {
    pub fn new(element: Option<Element>) -> Self {
        Self { element }
    }
}

impl CountIndicator for DomCountIndicator {
    fn set_text(&self, text: &str) {
        if let Some(element) = &self.element {
            element.set_text_content(Some(text));
        }
    }
}
