//! # registro-api
//!
//! Typed client for the student registration JSON API.
//!
//! ## Endpoints
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | List records | `GET` | `/api/estudiantes` |
//! | Get record | `GET` | `/api/estudiantes/{id}` |
//! | Create record | `POST` | `/api/registrar_estudiante` |
//! | Update record | `PUT` | `/api/estudiantes/{id}` |
//! | Delete record | `DELETE` | `/api/estudiantes/{id}` |
//!
//! Every response is an envelope `{status, message?, ...}`; only
//! `status == "success"` counts as success.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use registro_api::{ClientConfig, FieldMap, HttpRegistrationApi, RegistrationApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = HttpRegistrationApi::new(&ClientConfig::new("http://127.0.0.1:5000"))?;
//!
//!     let mut fields = FieldMap::new();
//!     fields.insert("nombre", "Ana");
//!     fields.insert("apellido", "Ruiz");
//!     fields.insert("correo", "a@x.com");
//!     fields.insert("curso", "Math");
//!     let ack = api.create_registration(&fields).await?;
//!     println!("{:?}", ack.message);
//!
//!     for record in api.list_registrations().await? {
//!         println!("{} {} <{}>", record.first_name, record.last_name, record.email);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError):
//!
//! - [`ApiError::Rejected`]: the server reported a failure, with its message if any
//! - [`ApiError::NetworkError`] / [`ApiError::ParseError`]: transport failures
//!
//! Nothing is retried.

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::{ClientConfig, HttpRegistrationApi};
pub use error::{ApiError, Result};
pub use traits::RegistrationApi;
pub use types::{Acknowledgement, FieldMap, RecordId, Registration, FIELD_NAMES, STATUS_SUCCESS};
