// src/models/review.rs

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Review from Google Places
/// DOCUMENTATION: Provider shape; any field may be missing in a malformed response
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct GoogleReview {
    /// Review author name
    pub author_name: Option<String>,
    /// Rating (1-5), kept as the provider's number so `5` stays `5`
    pub rating: Option<Number>,
    /// Review text
    pub text: Option<String>,
    /// Relative time description (e.g., "a month ago")
    pub relative_time_description: Option<String>,
    /// Time of review (Unix timestamp), unused
    pub time: Option<i64>,
    /// Profile photo URL, unused
    pub profile_photo_url: Option<String>,
}

/// Display-ready review row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(rename = "Author")]
    pub author: String,
    #[serde(rename = "Rating")]
    pub rating: Number,
    #[serde(rename = "Text")]
    pub text: String,
    /// Human-readable, not a structured timestamp
    #[serde(rename = "Time")]
    pub time: String,
}
