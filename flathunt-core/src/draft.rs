//! Create-form draft and its validated wire payload.

use serde::Serialize;
use thiserror::Error;

/// Field selector for keyed draft updates.
///
/// `description` is deliberately absent: it is mirrored from the
/// multi-line editor widget rather than set through the keyed dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    UnitName,
    UnitNumber,
    Project,
    Price,
}

impl DraftField {
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::UnitName => "unit name",
            DraftField::UnitNumber => "unit number",
            DraftField::Project => "project",
            DraftField::Price => "price",
        }
    }
}

/// An in-progress apartment submission.
///
/// `price` stays raw text until submission, when [`ApartmentDraft::validate`]
/// parses it to an integer. Validation rejects rather than substituting a
/// sentinel: a draft that does not parse never reaches the collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApartmentDraft {
    pub unit_name: String,
    pub unit_number: String,
    pub project: String,
    pub description: String,
    pub price: String,
}

impl ApartmentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single update entry point, dispatching on the field name.
    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::UnitName => self.unit_name = value,
            DraftField::UnitNumber => self.unit_number = value,
            DraftField::Project => self.project = value,
            DraftField::Price => self.price = value,
        }
    }

    /// Mirror target for the description editor; called on every input
    /// event against the editor's full text content.
    pub fn set_description(&mut self, text: String) {
        self.description = text;
    }

    /// Check required fields and parse the price, producing the create
    /// payload. The draft itself is left untouched either way.
    pub fn validate(&self) -> Result<CreateApartmentRequest, DraftError> {
        for (field, value) in [
            (DraftField::UnitName, &self.unit_name),
            (DraftField::UnitNumber, &self.unit_number),
            (DraftField::Project, &self.project),
            (DraftField::Price, &self.price),
        ] {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField(field.label()));
            }
        }

        let price: i64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| DraftError::InvalidPrice(self.price.clone()))?;
        if price < 0 {
            return Err(DraftError::NegativePrice(price));
        }

        Ok(CreateApartmentRequest {
            unit_name: self.unit_name.clone(),
            unit_number: self.unit_number.clone(),
            project: self.project.clone(),
            description: self.description.clone(),
            price,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("price '{0}' is not a whole number")]
    InvalidPrice(String),
    #[error("price must not be negative, got {0}")]
    NegativePrice(i64),
}

/// Body for `POST /apartments`. Wire field names are camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApartmentRequest {
    pub unit_name: String,
    pub unit_number: String,
    pub project: String,
    pub description: String,
    pub price: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ApartmentDraft {
        ApartmentDraft {
            unit_name: "Garden Suite".to_string(),
            unit_number: "B-204".to_string(),
            project: "Palm Hills".to_string(),
            description: "Two bedrooms".to_string(),
            price: "2500000".to_string(),
        }
    }

    #[test]
    fn valid_draft_parses_price_to_integer() {
        let request = filled_draft().validate().unwrap();
        assert_eq!(request.price, 2_500_000);
        assert_eq!(request.unit_name, "Garden Suite");
        assert_eq!(request.description, "Two bedrooms");
    }

    #[test]
    fn payload_uses_camel_case_wire_names() {
        let request = filled_draft().validate().unwrap();
        let value = serde_json::to_value(&request).unwrap();
        let map = value.as_object().unwrap();
        assert!(map.contains_key("unitName"));
        assert!(map.contains_key("unitNumber"));
        assert!(map.contains_key("project"));
        assert!(map.contains_key("description"));
        assert_eq!(map["price"], serde_json::json!(2_500_000));
    }

    #[test]
    fn each_required_field_blocks_submission() {
        for field in [
            DraftField::UnitName,
            DraftField::UnitNumber,
            DraftField::Project,
            DraftField::Price,
        ] {
            let mut draft = filled_draft();
            draft.set(field, String::new());
            assert_eq!(
                draft.validate(),
                Err(DraftError::MissingField(field.label()))
            );
        }
    }

    #[test]
    fn description_is_not_required() {
        let mut draft = filled_draft();
        draft.set_description(String::new());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn non_numeric_price_is_rejected_not_sent() {
        let mut draft = filled_draft();
        draft.set(DraftField::Price, "2.5m".to_string());
        assert_eq!(
            draft.validate(),
            Err(DraftError::InvalidPrice("2.5m".to_string()))
        );
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut draft = filled_draft();
        draft.set(DraftField::Price, "-10".to_string());
        assert_eq!(draft.validate(), Err(DraftError::NegativePrice(-10)));
    }

    #[test]
    fn price_tolerates_surrounding_whitespace() {
        let mut draft = filled_draft();
        draft.set(DraftField::Price, " 900000 ".to_string());
        assert_eq!(draft.validate().unwrap().price, 900_000);
    }

    #[test]
    fn set_dispatches_to_the_named_slot() {
        let mut draft = ApartmentDraft::new();
        draft.set(DraftField::UnitName, "a".to_string());
        draft.set(DraftField::UnitNumber, "b".to_string());
        draft.set(DraftField::Project, "c".to_string());
        draft.set(DraftField::Price, "1".to_string());

        assert_eq!(draft.unit_name, "a");
        assert_eq!(draft.unit_number, "b");
        assert_eq!(draft.project, "c");
        assert_eq!(draft.price, "1");
        assert!(draft.description.is_empty());
    }

    #[test]
    fn validation_leaves_the_draft_intact() {
        let mut draft = filled_draft();
        draft.set(DraftField::Price, "not-a-price".to_string());
        let before = draft.clone();
        let _ = draft.validate();
        assert_eq!(draft, before);
    }
}
