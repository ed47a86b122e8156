//! Controller-facing classification of API results

use registro_api::ApiError;

/// What a controller does with an API result.
///
/// Three-way split of `Result<T, ApiError>`: success, a failure the server
/// reported (with its message, if any), or a transport failure whose detail is
/// logged and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome<T> {
    Success(T),
    Reported(Option<String>),
    Transport,
}

impl<T> ApiOutcome<T> {
    /// Classify a result, logging the failure under `operation`.
    pub fn classify(result: registro_api::Result<T>, operation: &str) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(ApiError::Rejected {
                message,
                http_status,
            }) => {
                log::warn!(
                    "{operation} rejected (HTTP {http_status}): {}",
                    message.as_deref().unwrap_or("<no message>")
                );
                Self::Reported(message)
            }
            Err(e) => {
                log::error!("{operation} failed: {e}");
                Self::Transport
            }
        }
    }
}
