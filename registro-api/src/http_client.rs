//! Generic HTTP request handling
//!
//! Sending, logging and envelope decoding shared by every endpoint.
//!
//! # Failure classes
//! - The request could not be sent or its body could not be read → `NetworkError`
//! - The body is not the expected JSON → `ParseError`
//! - The body is a valid envelope whose `status` is not `"success"` → `Rejected`
//!
//! The HTTP status code alone never decides success: the server answers
//! reported failures with 4xx/5xx codes *and* a JSON envelope, and the envelope
//! is what counts.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::types::Envelope;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text.
    ///
    /// A single attempt; no retry and no timeout.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("{method_name} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| ApiError::NetworkError {
                detail: e.to_string(),
            })?;

        let status_code = response.status().as_u16();
        log::debug!("Response Status: {status_code}");

        let response_text = response
            .text()
            .await
            .map_err(|e| ApiError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    pub fn parse_json<T>(response_text: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            ApiError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// Decode a response envelope, splitting success from reported failure.
    ///
    /// Returns the server message alongside the payload on success.
    pub(crate) fn parse_envelope<T>(
        status_code: u16,
        response_text: &str,
    ) -> Result<(Option<String>, T), ApiError>
    where
        T: DeserializeOwned,
    {
        let envelope: Envelope<T> = Self::parse_json(response_text)?;

        if envelope.is_success() {
            return Ok((envelope.message, envelope.payload));
        }

        log::warn!(
            "Request rejected (HTTP {status_code}, status={:?}): {}",
            envelope.status,
            envelope.message.as_deref().unwrap_or("<no message>")
        );
        Err(ApiError::Rejected {
            message: envelope.message,
            http_status: status_code,
        })
    }
}
