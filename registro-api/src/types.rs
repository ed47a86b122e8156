use std::fmt;

use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Value of the `status` field that marks a successful response.
pub const STATUS_SUCCESS: &str = "success";

/// Names of the registration form fields, in form order.
pub const FIELD_NAMES: [&str; 5] = ["nombre", "apellido", "correo", "telefono", "curso"];

// ============ Record ============

/// Server-assigned record identifier.
///
/// Treated as opaque. The server emits integers, but strings are accepted too;
/// either way the id is kept in its textual form and used verbatim in paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self(TextOrNumber::deserialize(deserializer)?.into_string()))
    }
}

/// A scalar the server may send either as text or as a JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl TextOrNumber {
    fn into_string(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Number(n) => n.to_string(),
        }
    }
}

/// Text field that may arrive as a number (e.g. a numeric phone column).
fn string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?.map(TextOrNumber::into_string))
}

/// `null` and missing text fields both read as the empty string.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(string_or_number(deserializer)?.unwrap_or_default())
}

/// A registration record as stored by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub id: RecordId,
    #[serde(rename = "nombre", default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(rename = "apellido", default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(rename = "correo", default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(
        rename = "telefono",
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(rename = "curso", default, deserialize_with = "null_as_empty")]
    pub course: String,
    /// Server timestamp, kept as sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Registration {
    /// Form field values of this record, keyed by form field name.
    ///
    /// A missing phone reads as the empty string so that populating a form from
    /// it clears whatever the field held before.
    pub fn field_values(&self) -> [(&'static str, &str); 5] {
        [
            ("nombre", self.first_name.as_str()),
            ("apellido", self.last_name.as_str()),
            ("correo", self.email.as_str()),
            ("telefono", self.phone.as_deref().unwrap_or_default()),
            ("curso", self.course.as_str()),
        ]
    }
}

// ============ Request body ============

/// Flat `name -> value` map of form fields, the body of create and update.
///
/// Keeps insertion order; inserting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap(Vec<(String, String)>);

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.0.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.0.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ============ Responses ============

/// Common response envelope: `{status, message?, ...payload}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(STATUS_SUCCESS)
    }
}

/// Payload of `GET /api/estudiantes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ListPayload {
    #[serde(default)]
    pub estudiantes: Option<Vec<Registration>>,
}

/// Payload of `GET /api/estudiantes/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SinglePayload {
    #[serde(default)]
    pub estudiante: Option<Registration>,
}

/// Payload of the write endpoints; only create returns an id.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct WritePayload {
    #[serde(default)]
    pub id: Option<RecordId>,
}

/// Successful answer to a create, update or delete request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    /// Message supplied by the server, if any.
    pub message: Option<String>,
    /// Id of the created record (create only).
    pub id: Option<RecordId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_accepts_number_and_string() {
        let from_int: RecordId = serde_json::from_str("7").unwrap();
        let from_str: RecordId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(from_int, from_str);
        assert_eq!(from_int.as_str(), "7");
    }

    #[test]
    fn record_id_serializes_as_string() {
        let id = RecordId::new("42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }

    #[test]
    fn registration_from_server_row() {
        let json = r#"{
            "id": 3,
            "nombre": "Ana",
            "apellido": "Ruiz",
            "correo": "a@x.com",
            "telefono": null,
            "curso": "Math",
            "created_at": "Tue, 01 Apr 2025 10:00:00 GMT"
        }"#;
        let record: Registration = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_str(), "3");
        assert_eq!(record.first_name, "Ana");
        assert_eq!(record.phone, None);
        assert_eq!(
            record.created_at.as_deref(),
            Some("Tue, 01 Apr 2025 10:00:00 GMT")
        );
    }

    #[test]
    fn registration_null_text_reads_empty() {
        let json = r#"{"id": "9", "nombre": null, "curso": "Art"}"#;
        let record: Registration = serde_json::from_str(json).unwrap();
        assert_eq!(record.first_name, "");
        assert_eq!(record.last_name, "");
        assert_eq!(record.course, "Art");
    }

    #[test]
    fn numeric_text_fields_read_as_text() {
        let json = r#"{"id": 4, "nombre": "Leo", "telefono": 987654321, "curso": 101}"#;
        let record: Registration = serde_json::from_str(json).unwrap();
        assert_eq!(record.phone.as_deref(), Some("987654321"));
        assert_eq!(record.course, "101");
    }

    #[test]
    fn numeric_phone_does_not_reject_list() {
        let json = r#"{"status":"success","estudiantes":[
            {"id": 1, "nombre": "Ana", "telefono": 987654321, "curso": "Math"},
            {"id": 2, "nombre": "Eva", "telefono": "555-0101", "curso": "Bio"}
        ]}"#;
        let envelope: Envelope<ListPayload> = serde_json::from_str(json).unwrap();
        assert!(envelope.is_success());
        let rows = envelope.payload.estudiantes.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].phone.as_deref(), Some("987654321"));
        assert_eq!(rows[1].phone.as_deref(), Some("555-0101"));
    }

    #[test]
    fn field_values_clear_missing_phone() {
        let record = Registration {
            id: RecordId::new("1"),
            first_name: "Ana".into(),
            last_name: "Ruiz".into(),
            email: "a@x.com".into(),
            phone: None,
            course: "Math".into(),
            created_at: None,
        };
        let fields: FieldMap = record.field_values().into_iter().collect();
        assert_eq!(fields.len(), FIELD_NAMES.len());
        assert_eq!(fields.get("telefono"), Some(""));
        let names: Vec<&str> = fields.iter().map(|(n, _)| n).collect();
        assert_eq!(names, FIELD_NAMES);
    }

    #[test]
    fn field_map_replaces_in_place() {
        let mut fields = FieldMap::new();
        fields.insert("nombre", "Ana");
        fields.insert("curso", "Math");
        fields.insert("nombre", "Eva");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("nombre"), Some("Eva"));
        assert_eq!(
            serde_json::to_string(&fields).unwrap(),
            r#"{"nombre":"Eva","curso":"Math"}"#
        );
    }

    #[test]
    fn envelope_success_requires_exact_status() {
        let ok: Envelope<WritePayload> =
            serde_json::from_str(r#"{"status":"success","id":5}"#).unwrap();
        assert!(ok.is_success());
        assert_eq!(ok.payload.id, Some(RecordId::new("5")));

        let missing: Envelope<WritePayload> = serde_json::from_str("{}").unwrap();
        assert!(!missing.is_success());

        let other: Envelope<WritePayload> =
            serde_json::from_str(r#"{"status":"SUCCESS"}"#).unwrap();
        assert!(!other.is_success());
    }
}
