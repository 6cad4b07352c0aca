// src/models/analysis.rs
// DOCUMENTATION: Pipeline result shapes
// PURPOSE: What the analyze endpoint returns to the search page

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Serialize, Serializer};

use super::{PlaceRecord, ReviewRecord};

pub const NOT_FOUND_MESSAGE: &str = "Hotel not found. Try a different name.";
pub const NO_REVIEWS_MESSAGE: &str = "No reviews found for this hotel.";

/// Rendered word cloud
/// DOCUMENTATION: Derived only from the concatenated review text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCloudArtifact {
    pub width: u32,
    pub height: u32,
    /// PNG bytes, base64 in JSON so the page can inline them
    #[serde(rename = "png_base64", serialize_with = "as_base64")]
    pub png: Vec<u8>,
}

fn as_base64<T: AsRef<[u8]>, S: Serializer>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&STANDARD.encode(bytes.as_ref()))
}

/// Outcome of one hotel lookup
/// DOCUMENTATION: Serialized with a `status` tag: found, no_reviews, not_found
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Found {
        place: PlaceRecord,
        reviews: Vec<ReviewRecord>,
        wordcloud: WordCloudArtifact,
    },
    NoReviews {
        place: PlaceRecord,
        message: String,
    },
    NotFound {
        query: String,
        message: String,
    },
}

impl AnalysisOutcome {
    pub fn not_found(query: impl Into<String>) -> Self {
        AnalysisOutcome::NotFound {
            query: query.into(),
            message: NOT_FOUND_MESSAGE.to_string(),
        }
    }

    pub fn no_reviews(place: PlaceRecord) -> Self {
        AnalysisOutcome::NoReviews {
            place,
            message: NO_REVIEWS_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            AnalysisOutcome::Found { .. } => "found",
            AnalysisOutcome::NoReviews { .. } => "no_reviews",
            AnalysisOutcome::NotFound { .. } => "not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_tagged_by_status() {
        let value = serde_json::to_value(AnalysisOutcome::not_found("Nowhere Inn")).unwrap();

        assert_eq!(value["status"], "not_found");
        assert_eq!(value["query"], "Nowhere Inn");
        assert_eq!(value["message"], NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_wordcloud_png_is_base64_in_json() {
        let artifact = WordCloudArtifact {
            width: 800,
            height: 400,
            png: b"\x89PNG".to_vec(),
        };

        let value = serde_json::to_value(&artifact).unwrap();
        assert_eq!(value["png_base64"], "iVBORw==");
        assert_eq!(value["width"], 800);
    }
}
