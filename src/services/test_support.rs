// src/services/test_support.rs
// DOCUMENTATION: Stub collaborators shared by service and handler tests

use crate::errors::AnalyzerError;
use crate::models::{GoogleReview, PlaceCandidate, PlaceDetails, WordCloudArtifact};
use crate::services::{PlacesProvider, WordCloudRenderer};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Canned provider that records every call
#[derive(Default)]
pub struct StubProvider {
    pub candidates: Vec<PlaceCandidate>,
    pub details: HashMap<String, PlaceDetails>,
    pub fail_search: bool,
    pub searches: Mutex<Vec<String>>,
    pub detail_calls: AtomicUsize,
}

impl StubProvider {
    pub fn candidate(id: &str) -> PlaceCandidate {
        PlaceCandidate {
            place_id: id.to_string(),
            name: None,
            formatted_address: None,
        }
    }

    /// One candidate `p1` for the Taj Mahal Palace with a single review
    pub fn taj() -> Self {
        let mut details = HashMap::new();
        details.insert(
            "p1".to_string(),
            PlaceDetails {
                place_id: None,
                name: Some("Taj Mahal Palace".to_string()),
                formatted_address: Some("Apollo Bandar, Colaba, Mumbai".to_string()),
                rating: Some(4.7),
                reviews: Some(vec![GoogleReview {
                    author_name: Some("A".to_string()),
                    rating: Some(serde_json::Number::from(5)),
                    text: Some("Excellent".to_string()),
                    relative_time_description: Some("a week ago".to_string()),
                    ..GoogleReview::default()
                }]),
            },
        );

        Self {
            candidates: vec![Self::candidate("p1")],
            details,
            ..Self::default()
        }
    }

    pub fn search_count(&self) -> usize {
        self.searches.lock().unwrap().len()
    }
}

#[async_trait]
impl PlacesProvider for StubProvider {
    async fn text_search(&self, query: &str) -> Result<Vec<PlaceCandidate>, AnalyzerError> {
        self.searches.lock().unwrap().push(query.to_string());
        if self.fail_search {
            return Err(AnalyzerError::ExternalApiError("connection reset".to_string()));
        }
        Ok(self.candidates.clone())
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, AnalyzerError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.details
            .get(place_id)
            .cloned()
            .ok_or_else(|| AnalyzerError::ExternalApiError(format!("no details for {}", place_id)))
    }
}

/// Renderer that remembers the text it was given
#[derive(Default)]
pub struct RecordingRenderer {
    pub texts: Mutex<Vec<String>>,
}

impl WordCloudRenderer for RecordingRenderer {
    fn render(&self, text: &str) -> Result<WordCloudArtifact, AnalyzerError> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(WordCloudArtifact {
            width: 800,
            height: 400,
            png: b"\x89PNG".to_vec(),
        })
    }
}
