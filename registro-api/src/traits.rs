use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Acknowledgement, FieldMap, RecordId, Registration};

/// Registration API Trait
///
/// One method per endpoint. A reported failure (`status` other than
/// `"success"`) comes back as [`ApiError::Rejected`](crate::ApiError::Rejected);
/// every other error is a transport failure.
///
/// Futures are not `Send`: in the browser every call runs on the single event
/// loop thread.
#[async_trait(?Send)]
pub trait RegistrationApi {
    /// `GET /api/estudiantes`, in server order.
    async fn list_registrations(&self) -> Result<Vec<Registration>>;

    /// `GET /api/estudiantes/{id}`
    async fn fetch_registration(&self, id: &RecordId) -> Result<Registration>;

    /// `POST /api/registrar_estudiante`
    async fn create_registration(&self, fields: &FieldMap) -> Result<Acknowledgement>;

    /// `PUT /api/estudiantes/{id}`
    async fn update_registration(
        &self,
        id: &RecordId,
        fields: &FieldMap,
    ) -> Result<Acknowledgement>;

    /// `DELETE /api/estudiantes/{id}`
    async fn delete_registration(&self, id: &RecordId) -> Result<Acknowledgement>;
}
