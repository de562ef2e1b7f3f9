use serde::{Deserialize, Serialize};

use crate::domain::record::{
    validation::{check_email, check_length, check_phone, check_required},
    Draft, Record, RecordForm, RecordId, Violations,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase", try_from = "WalkerDocument")]
pub struct Walker {
    #[serde(rename = "id")]
    id: RecordId,
    name: String,
    email: String,
    phone: String,
    location: String,
}

impl Walker {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl Record for Walker {
    const KIND: &'static str = "Walker";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Read shape of a stored walker. Older documents carry the identifier twice
/// (`id` and `Id`) and may lack text fields.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct WalkerDocument {
    #[serde(rename = "id", default)]
    id: Option<String>,
    #[serde(rename = "Id", default)]
    legacy_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    location: Option<String>,
}

impl TryFrom<WalkerDocument> for Walker {
    type Error = String;

    fn try_from(doc: WalkerDocument) -> Result<Self, Self::Error> {
        let id = doc
            .id
            .filter(|id| !id.trim().is_empty())
            .or(doc.legacy_id.filter(|id| !id.trim().is_empty()))
            .ok_or_else(|| "walker document has no identifier".to_string())?;

        Ok(Walker {
            id: RecordId::from(id),
            name: doc.name.unwrap_or_default(),
            email: doc.email.unwrap_or_default(),
            phone: doc.phone.unwrap_or_default(),
            location: doc.location.unwrap_or_default(),
        })
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct WalkerForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WalkerDraft {
    name: String,
    email: String,
    phone: String,
    location: String,
}

impl RecordForm for WalkerForm {
    type Draft = WalkerDraft;

    fn validate(&self) -> Result<WalkerDraft, Violations> {
        let mut violations = Violations::new();

        check_length(&mut violations, "name", "Name", &self.name, 3, 100);
        check_email(&mut violations, "email", "Email", &self.email);
        check_phone(&mut violations, "phone", "Phone", &self.phone);
        check_required(&mut violations, "location", "Location", &self.location);

        violations.into_result(|| WalkerDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
        })
    }
}

impl Draft for WalkerDraft {
    type Record = Walker;

    fn with_id(self, id: RecordId) -> Walker {
        Walker {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            location: self.location,
        }
    }
}

#[cfg(test)]
pub(crate) fn walker_form(name: &str, email: &str, phone: &str, location: &str) -> WalkerForm {
    WalkerForm {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        location: location.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Rule;

    #[test]
    fn test_valid_walker() {
        let walker = walker_form("Alice", "alice@example.com", "555-1234", "Park")
            .validate()
            .unwrap()
            .with_id(RecordId::from("w-1"));

        assert_eq!(walker.id().as_str(), "w-1");
        assert_eq!(walker.name(), "Alice");
        assert_eq!(walker.email(), "alice@example.com");
        assert_eq!(walker.phone(), "555-1234");
        assert_eq!(walker.location(), "Park");
    }

    #[test]
    fn test_short_name_and_bad_email() {
        let violations = walker_form("Al", "not-an-email", "555-1234", "Park")
            .validate()
            .unwrap_err();

        assert_eq!(violations.len(), 2);
        assert!(violations.has("name", Rule::Length));
        assert!(violations.has("email", Rule::Format));
    }

    #[test]
    fn test_missing_location_and_bad_phone() {
        let violations = walker_form("Alice", "a@b.c", "phone", "").validate().unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations.has("phone", Rule::Format));
        assert!(violations.has("location", Rule::Required));
    }

    #[test]
    fn test_writes_single_identifier_field() {
        let walker = walker_form("Alice", "a@b.c", "555-1234", "Park")
            .validate()
            .unwrap()
            .with_id(RecordId::from("w-1"));
        let value = serde_json::to_value(&walker).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "id": "w-1",
                "Name": "Alice",
                "Email": "a@b.c",
                "Phone": "555-1234",
                "Location": "Park"
            })
        );
        assert!(value.get("Id").is_none());
    }

    #[test]
    fn test_reads_legacy_duplicate_identifier() {
        let value = serde_json::json!({
            "id": "w-1",
            "Id": "w-1",
            "Name": "Alice",
            "Email": "a@b.c",
            "Phone": "555-1234",
            "Location": "Park",
            "_rid": "ignored"
        });
        let walker: Walker = serde_json::from_value(value).unwrap();
        assert_eq!(walker.id().as_str(), "w-1");
        assert_eq!(walker.name(), "Alice");
    }

    #[test]
    fn test_reads_legacy_id_only_and_missing_fields() {
        let value = serde_json::json!({ "Id": "w-2", "Name": "Bob" });
        let walker: Walker = serde_json::from_value(value).unwrap();
        assert_eq!(walker.id().as_str(), "w-2");
        assert_eq!(walker.name(), "Bob");
        assert_eq!(walker.email(), "");
        assert_eq!(walker.location(), "");
    }

    #[test]
    fn test_rejects_document_without_identifier() {
        let value = serde_json::json!({ "Name": "Nobody" });
        let err = serde_json::from_value::<Walker>(value).unwrap_err();
        assert!(err.to_string().contains("no identifier"));
    }
}
