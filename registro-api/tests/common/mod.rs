//! Shared helpers for the HTTP client integration tests

#![allow(dead_code, clippy::expect_used)]

use registro_api::{ClientConfig, FieldMap, HttpRegistrationApi};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Client pointed at the mock server.
pub fn client_for(server: &MockServer) -> HttpRegistrationApi {
    HttpRegistrationApi::new(&ClientConfig::new(server.uri()))
        .expect("mock server uri is a valid base url")
}

/// Server row as the registration backend emits it.
pub fn server_row(id: i64, nombre: &str, curso: &str) -> Value {
    json!({
        "id": id,
        "nombre": nombre,
        "apellido": "Ruiz",
        "correo": format!("{}@x.com", nombre.to_lowercase()),
        "telefono": null,
        "curso": curso,
        "created_at": "Tue, 01 Apr 2025 10:00:00 GMT"
    })
}

/// The scenario record's form fields.
pub fn ana_fields() -> FieldMap {
    [
        ("nombre", "Ana"),
        ("apellido", "Ruiz"),
        ("correo", "a@x.com"),
        ("telefono", ""),
        ("curso", "Math"),
    ]
    .into_iter()
    .collect()
}
