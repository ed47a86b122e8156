//! Page element handles
//!
//! The controllers never look elements up themselves; each handle is resolved
//! once by the front-end and injected into [`PageContext`](crate::PageContext).
//!
//! Platform implementation:
//! - Browser: `registro-web` (`web-sys` elements)
//! - Tests: `test_utils` recording mocks
//!
//! All methods take `&self`: handles are shared between callbacks, and the
//! underlying elements are mutated through the platform's own interior
//! mutability.

use crate::types::{Banner, FieldMap};

/// Container the record list is rendered into
pub trait ListContainer {
    /// Replace the container's contents with `html`.
    ///
    /// `html` is produced by the list renderer and already escaped.
    fn set_html(&self, html: &str);
}

/// Element showing the total record count
pub trait CountIndicator {
    fn set_text(&self, text: &str);
}

/// The registration form
pub trait RegistrationForm {
    /// Every named form field and its current value, in form order.
    fn field_values(&self) -> FieldMap;

    /// Set the value of the field named `name`.
    fn set_field(&self, name: &str, value: &str);

    /// Reset every field to its initial value.
    fn reset(&self);

    /// Move focus to the first input of the form.
    fn focus_first(&self);

    fn set_submit_label(&self, label: &str);
}

/// The two user-notification channels
///
/// The inline banner reports form submissions; blocking dialogs handle delete
/// confirmation and delete failures.
pub trait Notifier {
    /// Show `banner` above the form, replacing any banner already shown.
    fn show_banner(&self, banner: &Banner);

    /// Remove the banner, if one is shown.
    fn clear_banner(&self);

    /// Blocking alert dialog.
    fn alert(&self, message: &str);

    /// Blocking confirmation dialog; `true` means the user accepted.
    fn confirm(&self, message: &str) -> bool;
}
