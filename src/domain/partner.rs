//! Partner records as delivered by the event API
//!
//! The dataset endpoint wraps everything in a single object with a
//! `partners` array. Field names on the wire are camelCase. Availability
//! dates stay raw strings at this layer; they are parsed into
//! [`EventDate`](crate::domain::date::EventDate) values during aggregation
//! so that a single malformed date skips one entry instead of failing the
//! whole payload.

use serde::{Deserialize, Serialize};

/// One event partner from the dataset payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
    /// Dates the partner can attend. Missing on the wire means none.
    #[serde(default)]
    pub available_dates: Vec<String>,
}

/// Top-level dataset envelope returned by the event API.
///
/// A missing `partners` key deserializes to an empty list; the pipeline
/// treats empty and missing the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerDataset {
    #[serde(default)]
    pub partners: Vec<Partner>,
}

impl PartnerDataset {
    /// Returns true when the payload carried no usable partner records.
    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partner_from_camel_case() {
        let json = r#"{
            "firstName": "Ana",
            "lastName": "Moreno",
            "email": "ana.moreno@example.com",
            "country": "Spain",
            "availableDates": ["2024-03-01", "2024-03-02"]
        }"#;

        let partner: Partner = serde_json::from_str(json).unwrap();
        assert_eq!(partner.first_name, "Ana");
        assert_eq!(partner.last_name, "Moreno");
        assert_eq!(partner.email, "ana.moreno@example.com");
        assert_eq!(partner.country, "Spain");
        assert_eq!(partner.available_dates, ["2024-03-01", "2024-03-02"]);
    }

    #[test]
    fn test_missing_available_dates_defaults_to_empty() {
        let json = r#"{
            "firstName": "Ana",
            "lastName": "Moreno",
            "email": "ana.moreno@example.com",
            "country": "Spain"
        }"#;

        let partner: Partner = serde_json::from_str(json).unwrap();
        assert!(partner.available_dates.is_empty());
    }

    #[test]
    fn test_dataset_with_missing_partners_key_is_empty() {
        let dataset: PartnerDataset = serde_json::from_str("{}").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_dataset_with_partners() {
        let json = r#"{
            "partners": [{
                "firstName": "Ana",
                "lastName": "Moreno",
                "email": "ana.moreno@example.com",
                "country": "Spain",
                "availableDates": []
            }]
        }"#;

        let dataset: PartnerDataset = serde_json::from_str(json).unwrap();
        assert!(!dataset.is_empty());
        assert_eq!(dataset.partners.len(), 1);
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let partner = Partner {
            first_name: "Ana".to_string(),
            last_name: "Moreno".to_string(),
            email: "ana.moreno@example.com".to_string(),
            country: "Spain".to_string(),
            available_dates: vec!["2024-03-01".to_string()],
        };

        let json = serde_json::to_value(&partner).unwrap();
        assert!(json.get("firstName").is_some());
        assert!(json.get("availableDates").is_some());
        assert!(json.get("first_name").is_none());
    }
}
