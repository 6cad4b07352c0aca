// src/services/google_places_client.rs
// DOCUMENTATION: Google Places API client
// PURPOSE: Text search and place details calls against the Places web service

use crate::errors::AnalyzerError;
use crate::models::{PlaceCandidate, PlaceDetails};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const GOOGLE_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Fields requested from the details endpoint
const DETAIL_FIELDS: &str = "place_id,name,formatted_address,rating,reviews";

/// Upstream places lookup
/// DOCUMENTATION: Seam between the resolver and the network so tests can stub it
#[async_trait]
pub trait PlacesProvider: Send + Sync {
    /// Candidates for a free-text query, in provider order
    async fn text_search(&self, query: &str) -> Result<Vec<PlaceCandidate>, AnalyzerError>;

    /// Extended fields for one place identifier
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, AnalyzerError>;
}

/// Google Places API client
/// DOCUMENTATION: Handles authentication and API calls to Google Places
pub struct GooglePlacesClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Places API key
    api_key: String,
    /// Base URL for Google Places API
    base_url: String,
}

/// Response from Google Places Text Search
#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    #[serde(default)]
    results: Vec<PlaceCandidate>,
    status: String,
    error_message: Option<String>,
}

/// Response from Google Places Details
#[derive(Debug, Deserialize)]
struct DetailsResponse {
    result: Option<PlaceDetails>,
    status: String,
    error_message: Option<String>,
}

impl GooglePlacesClient {
    /// Create new Google Places API client
    /// DOCUMENTATION: The key is passed in explicitly, never read from the environment here
    /// `base_url` is normally GOOGLE_PLACES_BASE_URL; tests point it at a mock server
    pub fn with_options(
        api_key: String,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AnalyzerError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            AnalyzerError::ExternalApiError(format!("Could not build HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, AnalyzerError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                // the request URL carries the API key
                let e = e.without_url();
                log::error!("Google Places {} request failed: {}", endpoint, e);
                AnalyzerError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Google Places API error {}: {}", status, body);
            return Err(AnalyzerError::ExternalApiError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            let e = e.without_url();
            log::error!("Failed to parse Google Places {} response: {}", endpoint, e);
            AnalyzerError::ExternalApiError(format!("Parse error: {}", e))
        })
    }
}

#[async_trait]
impl PlacesProvider for GooglePlacesClient {
    /// Perform text search for places
    /// DOCUMENTATION: `ZERO_RESULTS` is an empty list, not an error
    async fn text_search(&self, query: &str) -> Result<Vec<PlaceCandidate>, AnalyzerError> {
        log::debug!("Google Places text search: query={:?}", query);

        let api_response: TextSearchResponse = self
            .get_json("textsearch/json", &[("query", query)])
            .await?;

        // Check API response status
        match api_response.status.as_str() {
            "OK" | "ZERO_RESULTS" => {
                log::info!(
                    "Google Places search returned {} results",
                    api_response.results.len()
                );
                Ok(api_response.results)
            }
            "OVER_QUERY_LIMIT" => {
                log::error!("Google Places API quota exceeded");
                Err(AnalyzerError::RateLimitExceeded)
            }
            "REQUEST_DENIED" | "INVALID_REQUEST" => {
                let msg = api_response
                    .error_message
                    .unwrap_or_else(|| "Unknown error".to_string());
                log::error!("Google Places API request denied: {}", msg);
                Err(AnalyzerError::ExternalApiError(msg))
            }
            other => {
                let msg = api_response
                    .error_message
                    .unwrap_or_else(|| format!("Unknown status: {}", other));
                log::error!("Google Places API unexpected status: {}", msg);
                Err(AnalyzerError::ExternalApiError(msg))
            }
        }
    }

    /// Get name, address, rating and reviews for a place
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails, AnalyzerError> {
        log::debug!("Google Places details lookup: place_id={}", place_id);

        let api_response: DetailsResponse = self
            .get_json(
                "details/json",
                &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
            )
            .await?;

        match (api_response.status.as_str(), api_response.result) {
            ("OK", Some(result)) => Ok(result),
            ("OK", None) => Err(AnalyzerError::ExternalApiError(
                "Details response without result".to_string(),
            )),
            (status, _) => {
                let msg = api_response
                    .error_message
                    .unwrap_or_else(|| format!("Details status: {}", status));
                log::error!("Google Places details failed for {}: {}", place_id, msg);
                Err(AnalyzerError::ExternalApiError(msg))
            }
        }
    }
}
