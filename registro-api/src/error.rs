use serde::{Deserialize, Serialize};

/// Unified error type for all registration API operations.
///
/// The variants fall into two classes:
///
/// - **Transport failures**: the request never produced a usable JSON answer
///   ([`NetworkError`](Self::NetworkError), [`ParseError`](Self::ParseError),
///   [`SerializationError`](Self::SerializationError),
///   [`InvalidConfig`](Self::InvalidConfig)).
/// - **Reported failures**: the server answered with a well-formed envelope whose
///   `status` is not `"success"` ([`Rejected`](Self::Rejected)).
///
/// Nothing is retried; callers decide how each class is surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (connection refused, fetch aborted, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The response body was not the JSON the endpoint promises.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },

    /// The client was configured with an unusable base URL.
    InvalidConfig {
        /// Description of what's wrong.
        detail: String,
    },

    /// The server answered, but reported a failure.
    Rejected {
        /// Message supplied by the server, if any.
        message: Option<String>,
        /// HTTP status code of the response.
        http_status: u16,
    },
}

impl ApiError {
    /// Whether the request failed before a structured answer was obtained.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }

    /// Whether the failure is an ordinary outcome, used to pick the log level.
    ///
    /// `true` logs at `warn`, `false` at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Server-supplied message of a reported failure.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => write!(f, "Serialization error: {detail}"),
            Self::InvalidConfig { detail } => write!(f, "Invalid configuration: {detail}"),
            Self::Rejected {
                message,
                http_status,
            } => {
                if let Some(msg) = message {
                    write!(f, "Rejected by server (HTTP {http_status}): {msg}")
                } else {
                    write!(f, "Rejected by server (HTTP {http_status})")
                }
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
