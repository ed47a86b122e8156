//! Registro Core Library
//!
//! Platform-independent controller for the student registration page:
//! - Record list loading and rendering (List Service)
//! - Edit-mode state machine (Edit Service)
//! - Create / update form submission (Submission Service)
//! - Confirmed deletion (Delete Service)
//!
//! The page itself is reached only through the element handle traits in
//! [`traits`], so the same controllers run in the browser (`registro-web`) and
//! against recording mocks in tests.

pub mod error;
pub mod i18n;
pub mod page;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use i18n::Language;
pub use page::RegistrationPage;
pub use services::{PageContext, RowAction};
pub use traits::{CountIndicator, ListContainer, Notifier, RegistrationApi, RegistrationForm};
pub use types::PageConfig;
