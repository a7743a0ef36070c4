//! Listing filter criteria and their wire encoding.

use serde::{Deserialize, Serialize};

/// Raw filter state as typed by the user.
///
/// An empty string means "no constraint on that field". The TUI mutates
/// this on every keystroke; only a debounced copy is ever committed as the
/// effective filter that drives a fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApartmentFilter {
    pub unit_name: String,
    pub unit_number: String,
    pub project: String,
}

impl ApartmentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field constrains the listing.
    pub fn is_empty(&self) -> bool {
        self.unit_name.is_empty() && self.unit_number.is_empty() && self.project.is_empty()
    }

    /// Reset all three fields in one atomic update.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Derive the wire query: unconstrained fields are dropped entirely,
    /// never sent as empty strings.
    pub fn to_query(&self) -> ApartmentQuery {
        ApartmentQuery {
            unit_name: non_empty(&self.unit_name),
            unit_number: non_empty(&self.unit_number),
            project: non_empty(&self.project),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Query parameters for `GET /apartments`.
///
/// Serialization skips `None`, so an omitted filter field produces no
/// query parameter at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApartmentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

impl ApartmentQuery {
    /// True when the query selects the full unfiltered collection.
    pub fn is_unconstrained(&self) -> bool {
        self.unit_name.is_none() && self.unit_number.is_none() && self.project.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serialized_keys(query: &ApartmentQuery) -> Vec<String> {
        match serde_json::to_value(query).unwrap() {
            serde_json::Value::Object(map) => map.keys().cloned().collect(),
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn empty_fields_are_omitted_from_the_query() {
        let filter = ApartmentFilter {
            unit_name: "Garden".to_string(),
            unit_number: String::new(),
            project: String::new(),
        };

        let query = filter.to_query();
        assert_eq!(query.unit_name.as_deref(), Some("Garden"));
        assert_eq!(serialized_keys(&query), vec!["unitName".to_string()]);
    }

    #[test]
    fn all_empty_filter_serializes_to_no_parameters() {
        let query = ApartmentFilter::new().to_query();
        assert!(query.is_unconstrained());
        assert!(serialized_keys(&query).is_empty());
    }

    #[test]
    fn clear_resets_every_field() {
        let mut filter = ApartmentFilter {
            unit_name: "a".to_string(),
            unit_number: "b".to_string(),
            project: "c".to_string(),
        };

        filter.clear();
        assert!(filter.is_empty());
        assert!(filter.to_query().is_unconstrained());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let filter = ApartmentFilter {
            unit_name: "x".to_string(),
            unit_number: "y".to_string(),
            project: "z".to_string(),
        };

        let mut keys = serialized_keys(&filter.to_query());
        keys.sort();
        assert_eq!(keys, vec!["project", "unitName", "unitNumber"]);
    }
}
