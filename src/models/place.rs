// src/models/place.rs
// DOCUMENTATION: Core data structures for hotel lookups
// PURPOSE: Query input, search candidates and resolved place records

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::GoogleReview;

/// Free-text hotel lookup
/// DOCUMENTATION: Built from the `name` / `location` query parameters
/// `location` falls back to the configured country-level hint when absent
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct PlaceQuery {
    /// Hotel or resort name (required)
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// Optional location hint (e.g., "India")
    #[validate(length(max = 255))]
    pub location: Option<String>,
}

impl PlaceQuery {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Trim the name and drop a blank location
    /// DOCUMENTATION: Applied before validation so "   " counts as empty
    pub fn normalized(self) -> Self {
        let location = self
            .location
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());

        Self {
            name: self.name.trim().to_string(),
            location,
        }
    }

    /// Location to search with, defaulting to `fallback`
    pub fn location_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.location.as_deref().unwrap_or(fallback)
    }
}

/// Text-search match, before detail resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCandidate {
    /// Google's unique place identifier
    pub place_id: String,
    pub name: Option<String>,
    pub formatted_address: Option<String>,
}

/// Extended fields returned by the details lookup
/// DOCUMENTATION: Only the fields requested by the resolver are modeled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub place_id: Option<String>,
    /// May be absent; the candidate's name is used instead
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    /// Average rating (0-5)
    pub rating: Option<f64>,
    /// Reviews as returned by the provider, order untouched
    pub reviews: Option<Vec<GoogleReview>>,
}

/// Resolved hotel
/// DOCUMENTATION: Produced once per query, never mutated, never persisted
/// `place_id` always comes from the chosen search candidate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceRecord {
    pub place_id: String,
    pub name: String,
    pub formatted_address: Option<String>,
    pub rating: Option<f64>,
    /// Raw reviews, projected into rows by the review projector
    #[serde(skip)]
    pub reviews: Option<Vec<GoogleReview>>,
}

impl PlaceRecord {
    /// Combine the chosen candidate with its details
    pub fn from_details(candidate: &PlaceCandidate, details: PlaceDetails) -> Self {
        let name = details
            .name
            .or_else(|| candidate.name.clone())
            .unwrap_or_default();

        Self {
            place_id: candidate.place_id.clone(),
            name,
            formatted_address: details.formatted_address,
            rating: details.rating,
            reviews: details.reviews,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_trims_and_drops_blank_location() {
        let query = PlaceQuery::new("  Taj Mahal Palace  ")
            .with_location("   ")
            .normalized();

        assert_eq!(query.name, "Taj Mahal Palace");
        assert_eq!(query.location, None);
        assert_eq!(query.location_or("India"), "India");
    }

    #[test]
    fn test_blank_name_fails_validation() {
        let query = PlaceQuery::new("   ").normalized();
        assert!(query.validate().is_err());

        let query = PlaceQuery::new("Oberoi").normalized();
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_record_takes_candidate_id() {
        let candidate = PlaceCandidate {
            place_id: "p1".to_string(),
            name: None,
            formatted_address: None,
        };
        let details = PlaceDetails {
            place_id: Some("other".to_string()),
            name: Some("Taj Mahal Palace".to_string()),
            formatted_address: Some("Apollo Bandar, Mumbai".to_string()),
            rating: Some(4.7),
            reviews: None,
        };

        let record = PlaceRecord::from_details(&candidate, details);
        assert_eq!(record.place_id, "p1");
        assert_eq!(record.name, "Taj Mahal Palace");
        assert_eq!(record.rating, Some(4.7));
    }

    #[test]
    fn test_record_name_falls_back_to_candidate() {
        let candidate = PlaceCandidate {
            place_id: "p1".to_string(),
            name: Some("Taj Mahal Palace".to_string()),
            formatted_address: None,
        };
        let details: PlaceDetails =
            serde_json::from_str(r#"{"formatted_address": "Colaba, Mumbai"}"#).unwrap();

        let record = PlaceRecord::from_details(&candidate, details);
        assert_eq!(record.name, "Taj Mahal Palace");
        assert_eq!(record.formatted_address.as_deref(), Some("Colaba, Mumbai"));
        assert_eq!(record.rating, None);
    }
}
