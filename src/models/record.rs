//! Record identity and partial-record types shared by every resource.
//!
//! Servers are inconsistent about id representation: some return record ids
//! as JSON strings, others as numbers. `RecordId` accepts both on the wire
//! and always renders as a string.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Opaque record identifier, assigned by the server.
///
/// Immutable once assigned; the client never generates one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IdVisitor;

        impl serde::de::Visitor<'_> for IdVisitor {
            type Value = RecordId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a string or integer record id")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(RecordId(v.to_string()))
            }

            fn visit_string<E: serde::de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(RecordId(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(RecordId(v.to_string()))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(RecordId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// A sparse set of field overrides, keyed by wire field name.
///
/// Doubles as the PATCH request body, the creation draft, and the per-record
/// edit overlay entry: all three are partial field maps on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPatch(BTreeMap<String, String>);

impl FieldPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field override, replacing any previous value for that field.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A record type managed against one REST collection endpoint.
///
/// Implementations are plain serde structs whose wire names match the
/// server's PascalCase fields. The collection manager is generic over this
/// trait; one implementation per resource replaces the per-resource
/// copy-paste the API would otherwise invite.
pub trait Resource: Clone + Serialize + DeserializeOwned {
    /// Collection path segment under the API base URL, e.g. `"customers"`.
    const PATH: &'static str;

    /// Capitalized singular used in status messages, e.g. `"Customer"`.
    const LABEL: &'static str;

    fn id(&self) -> &RecordId;

    /// The field searched and sorted on. Empty when the server record
    /// lacked the field.
    fn primary_text(&self) -> &str;

    /// Looks up a field value by wire name. `None` for unknown names.
    fn field(&self, name: &str) -> Option<String>;

    /// Shallow merge: fields named in the patch are overwritten, all other
    /// fields (and the id) are untouched. Unknown field names are ignored.
    fn apply(&mut self, patch: &FieldPatch);

    /// Wire names of the data fields, in display order.
    fn field_names() -> &'static [&'static str];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_from_json_string() {
        let id: RecordId = serde_json::from_str("\"abc-1\"").unwrap();
        assert_eq!(id.as_str(), "abc-1");
    }

    #[test]
    fn test_record_id_from_json_number() {
        let id: RecordId = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_str(), "42");

        let negative: RecordId = serde_json::from_str("-7").unwrap();
        assert_eq!(negative.as_str(), "-7");
    }

    #[test]
    fn test_record_id_serializes_as_string() {
        let id = RecordId::from("42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }

    #[test]
    fn test_record_id_display() {
        let id = RecordId::from("c-9");
        assert_eq!(format!("{}", id), "c-9");
    }

    #[test]
    fn test_field_patch_set_and_get() {
        let mut patch = FieldPatch::new();
        assert!(patch.is_empty());

        patch.set("Name", "Bob");
        patch.set("Name", "Bobby");
        assert_eq!(patch.get("Name"), Some("Bobby"));
        assert_eq!(patch.get("Missing"), None);
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_field_patch_wire_shape() {
        let patch = FieldPatch::new().with("B", "2").with("A", "1");
        let json = serde_json::to_string(&patch).unwrap();
        // Serializes as a bare JSON object, keys in stable order.
        assert_eq!(json, "{\"A\":\"1\",\"B\":\"2\"}");

        let parsed: FieldPatch = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, patch);
    }
}
