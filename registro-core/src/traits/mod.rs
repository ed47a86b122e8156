//! Platform abstraction trait definition

mod ui;

pub use registro_api::RegistrationApi;
pub use ui::{CountIndicator, ListContainer, Notifier, RegistrationForm};
