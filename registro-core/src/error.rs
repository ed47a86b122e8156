//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use registro_api::ApiError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A required page element is not present
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// A DOM operation failed
    #[error("DOM error: {0}")]
    Dom(String),

    /// Configuration could not be read
    #[error("Configuration error: {0}")]
    Config(String),

    /// API error (converting from library)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether it is expected behavior, used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MissingElement(_) => true,
            Self::Api(e) => e.is_expected(),
            _ => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
