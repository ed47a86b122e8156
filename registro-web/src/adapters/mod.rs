//! web-sys 元素适配器
//!
//! Implements the `registro-core` element handle traits on real DOM nodes.

mod elements;
mod form;
mod notifier;

pub use elements::{DomCountIndicator, DomListContainer};
pub use form::DomForm;
pub use notifier::DomNotifier;

use registro_core::CoreError;
use wasm_bindgen::JsValue;

/// Map a JS exception to a core error
pub fn dom_error(err: JsValue) -> CoreError {
    CoreError::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
