use serde::{Deserialize, Serialize};

use crate::domain::record::{
    validation::{check_length, check_range},
    Draft, Record, RecordForm, RecordId, Violations,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Pet {
    #[serde(rename = "id")]
    id: RecordId,
    name: String,
    #[serde(rename = "Type")]
    pet_type: String,
    age: i32,
    owner: String,
}

impl Pet {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pet_type(&self) -> &str {
        &self.pet_type
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

impl Record for Pet {
    const KIND: &'static str = "Pet";

    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Pet form as posted by the browser.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct PetForm {
    pub name: String,
    #[serde(rename = "type")]
    pub pet_type: String,
    pub age: String,
    pub owner: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PetDraft {
    name: String,
    pet_type: String,
    age: i32,
    owner: String,
}

impl RecordForm for PetForm {
    type Draft = PetDraft;

    fn validate(&self) -> Result<PetDraft, Violations> {
        let mut violations = Violations::new();

        check_length(&mut violations, "name", "Name", &self.name, 1, 100);
        check_length(&mut violations, "type", "Type", &self.pet_type, 1, 100);
        let age = check_range(&mut violations, "age", "Age", &self.age, 0, 100);
        check_length(&mut violations, "owner", "Owner", &self.owner, 1, 100);

        violations.into_result(|| PetDraft {
            name: self.name.clone(),
            pet_type: self.pet_type.clone(),
            age: age.unwrap_or_default(),
            owner: self.owner.clone(),
        })
    }
}

impl Draft for PetDraft {
    type Record = Pet;

    fn with_id(self, id: RecordId) -> Pet {
        Pet {
            id,
            name: self.name,
            pet_type: self.pet_type,
            age: self.age,
            owner: self.owner,
        }
    }
}

#[cfg(test)]
pub(crate) fn pet_form(name: &str, pet_type: &str, age: &str, owner: &str) -> PetForm {
    PetForm {
        name: name.to_string(),
        pet_type: pet_type.to_string(),
        age: age.to_string(),
        owner: owner.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Rule;

    #[test]
    fn test_valid_form_preserves_every_field() {
        let draft = pet_form("Rex", "Dog", "4", "Ann").validate().expect("form is valid");
        let pet = draft.with_id(RecordId::from("pet-1"));

        assert_eq!(pet.id().as_str(), "pet-1");
        assert_eq!(pet.name(), "Rex");
        assert_eq!(pet.pet_type(), "Dog");
        assert_eq!(pet.age(), 4);
        assert_eq!(pet.owner(), "Ann");
        assert_eq!(pet.partition_key(), pet.id());
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let pet = pet_form(" Rex ", "Dog", "0", "Ann")
            .validate()
            .unwrap()
            .with_id(RecordId::generate());
        assert_eq!(pet.name(), " Rex ");
        assert_eq!(pet.age(), 0);
    }

    #[test]
    fn test_empty_name_and_out_of_range_age_report_both() {
        let violations = pet_form("", "Dog", "150", "Ann").validate().unwrap_err();

        assert_eq!(violations.len(), 2);
        assert!(violations.has("name", Rule::Required));
        assert!(violations.has("age", Rule::Range));
    }

    #[test]
    fn test_all_fields_missing() {
        let violations = PetForm::default().validate().unwrap_err();
        assert_eq!(violations.len(), 4);
        assert!(violations.iter().all(|v| v.rule == Rule::Required));
    }

    #[test]
    fn test_over_long_text_fields() {
        let long = "x".repeat(101);
        let violations = pet_form(&long, &long, "1", &long).validate().unwrap_err();
        assert!(violations.has("name", Rule::Length));
        assert!(violations.has("type", Rule::Length));
        assert!(violations.has("owner", Rule::Length));
        assert!(!violations.for_field("age").any(|_| true));
    }

    #[test]
    fn test_document_shape_matches_stored_data() {
        let pet = pet_form("Rex", "Dog", "4", "Ann")
            .validate()
            .unwrap()
            .with_id(RecordId::from("pet-1"));
        let value = serde_json::to_value(&pet).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "pet-1",
                "Name": "Rex",
                "Type": "Dog",
                "Age": 4,
                "Owner": "Ann"
            })
        );

        let back: Pet = serde_json::from_value(value).unwrap();
        assert_eq!(back, pet);
    }
}
