use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a stored record.
///
/// The same value is the document key and the partition key of the record,
/// so there is no separate partition key type.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Fresh random (v4) identifier in canonical hyphenated form.
    pub fn generate() -> Self {
        RecordId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

// Identifiers coming back from forms or from existing documents are not
// required to be UUIDs.
impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId(value.to_string())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_is_unique_over_many_trials() {
        let ids: HashSet<RecordId> = (0..10_000).map(|_| RecordId::generate()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn test_generate_is_canonical_uuid() {
        let id = RecordId::generate();
        let parsed = Uuid::parse_str(id.as_str()).expect("generated id should parse");
        assert_eq!(parsed.to_string(), id.as_str());
        assert_eq!(id.as_str().len(), 36);
        assert!(!id.is_empty());
    }

    #[test]
    fn test_blank_id_is_empty() {
        assert!(RecordId::from("").is_empty());
        assert!(RecordId::from("   ").is_empty());
        assert!(!RecordId::from("absent-id").is_empty());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = RecordId::from("abc");
        let value = serde_json::to_value(&id).unwrap();
        assert_eq!(value, serde_json::json!("abc"));
    }
}
