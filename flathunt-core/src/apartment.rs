//! Apartment read model and identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned apartment identifier. Immutable once issued.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ApartmentId(i64);

impl ApartmentId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ApartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An apartment record as served by the listings API.
///
/// The same shape is returned by the collection and the by-id endpoints;
/// `description` is the only field the server may omit. Wire field names
/// are camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Apartment {
    pub id: ApartmentId,
    pub unit_name: String,
    pub unit_number: String,
    pub project: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_record() {
        let json = r#"{
            "id": 7,
            "unitName": "Garden Suite",
            "unitNumber": "B-204",
            "project": "Palm Hills",
            "description": "Two bedrooms, garden view",
            "price": 2500000
        }"#;

        let apartment: Apartment = serde_json::from_str(json).unwrap();
        assert_eq!(apartment.id, ApartmentId::new(7));
        assert_eq!(apartment.unit_name, "Garden Suite");
        assert_eq!(apartment.unit_number, "B-204");
        assert_eq!(apartment.project, "Palm Hills");
        assert_eq!(
            apartment.description.as_deref(),
            Some("Two bedrooms, garden view")
        );
        assert_eq!(apartment.price, 2_500_000);
    }

    #[test]
    fn description_is_optional_on_the_wire() {
        let json = r#"{
            "id": 1,
            "unitName": "Studio",
            "unitNumber": "A-1",
            "project": "Nile View",
            "price": 900000
        }"#;

        let apartment: Apartment = serde_json::from_str(json).unwrap();
        assert!(apartment.description.is_none());
    }

    #[test]
    fn id_serializes_as_bare_integer() {
        let id = ApartmentId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }
}
