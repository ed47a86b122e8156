//! reqwest-backed implementation of [`RegistrationApi`]

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;
use crate::traits::RegistrationApi;
use crate::types::{
    Acknowledgement, FieldMap, ListPayload, RecordId, Registration, SinglePayload, WritePayload,
};

const LIST_PATH: &str = "/api/estudiantes";
const CREATE_PATH: &str = "/api/registrar_estudiante";

/// Client configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// Absolute origin (optionally with a path prefix) the API is served under,
    /// e.g. `http://127.0.0.1:5000`.
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// Registration API over HTTP
pub struct HttpRegistrationApi {
    client: Client,
    base_url: String,
}

impl HttpRegistrationApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let parsed = Url::parse(&config.base_url).map_err(|e| ApiError::InvalidConfig {
            detail: format!("base_url '{}': {e}", config.base_url),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidConfig {
                detail: format!("base_url '{}' cannot be a base", config.base_url),
            });
        }

        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::InvalidConfig {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn record_url(&self, id: &RecordId) -> String {
        self.url(&format!("{LIST_PATH}/{}", urlencoding::encode(id.as_str())))
    }

    fn encode_fields(fields: &FieldMap) -> Result<String> {
        serde_json::to_string(fields).map_err(|e| ApiError::SerializationError {
            detail: e.to_string(),
        })
    }

    async fn send_write(
        &self,
        request: reqwest::RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<Acknowledgement> {
        let (status, text) = HttpUtils::execute_request(request, method_name, url).await?;
        let (message, payload): (_, WritePayload) = HttpUtils::parse_envelope(status, &text)?;
        Ok(Acknowledgement {
            message,
            id: payload.id,
        })
    }
}

#[async_trait(?Send)]
impl RegistrationApi for HttpRegistrationApi {
    async fn list_registrations(&self) -> Result<Vec<Registration>> {
        let url = self.url(LIST_PATH);
        let (status, text) =
            HttpUtils::execute_request(self.client.get(&url), "GET", &url).await?;
        let (_, payload): (_, ListPayload) = HttpUtils::parse_envelope(status, &text)?;
        Ok(payload.estudiantes.unwrap_or_default())
    }

    async fn fetch_registration(&self, id: &RecordId) -> Result<Registration> {
        let url = self.record_url(id);
        let (status, text) =
            HttpUtils::execute_request(self.client.get(&url), "GET", &url).await?;
        let (_, payload): (_, SinglePayload) = HttpUtils::parse_envelope(status, &text)?;
        payload.estudiante.ok_or_else(|| ApiError::ParseError {
            detail: "response is missing the 'estudiante' field".to_string(),
        })
    }

    async fn create_registration(&self, fields: &FieldMap) -> Result<Acknowledgement> {
        let url = self.url(CREATE_PATH);
        let body = Self::encode_fields(fields)?;
        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.send_write(request, "POST", &url).await
    }

    async fn update_registration(
        &self,
        id: &RecordId,
        fields: &FieldMap,
    ) -> Result<Acknowledgement> {
        let url = self.record_url(id);
        let body = Self::encode_fields(fields)?;
        let request = self
            .client
            .put(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.send_write(request, "PUT", &url).await
    }

    async fn delete_registration(&self, id: &RecordId) -> Result<Acknowledgement> {
        let url = self.record_url(id);
        self.send_write(self.client.delete(&url), "DELETE", &url)
            .await
    }
}
