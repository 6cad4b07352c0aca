// src/services/place_resolver.rs
// DOCUMENTATION: Hotel name -> resolved place
// PURPOSE: Text search, pick the first candidate, fetch its details

use crate::errors::AnalyzerError;
use crate::models::{PlaceQuery, PlaceRecord};
use crate::services::{CacheKey, PlaceCache, PlacesProvider};
use std::sync::Arc;

pub struct PlaceResolver {
    provider: Arc<dyn PlacesProvider>,
    cache: Option<Arc<PlaceCache>>,
    default_location: String,
}

impl PlaceResolver {
    /// Resolver without memoization
    pub fn new(provider: Arc<dyn PlacesProvider>, default_location: impl Into<String>) -> Self {
        Self {
            provider,
            cache: None,
            default_location: default_location.into(),
        }
    }

    /// Memoize outcomes in `cache` for the rest of the session
    pub fn with_cache(mut self, cache: Arc<PlaceCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Search text sent to the provider
    pub fn search_text(&self, query: &PlaceQuery) -> String {
        format!(
            "{}, {}",
            query.name,
            query.location_or(&self.default_location)
        )
    }

    /// Resolve a query to a single place
    /// DOCUMENTATION: The first search candidate always wins; there is no re-ranking.
    /// Returns Ok(None) when the search has no candidates.
    /// Upstream failures propagate and are never cached.
    pub async fn resolve(&self, query: &PlaceQuery) -> Result<Option<PlaceRecord>, AnalyzerError> {
        let key = CacheKey::new(&query.name, query.location_or(&self.default_location));

        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(&key).await {
                return Ok(cached);
            }
        }

        let resolved = self.lookup(query).await?;

        if let Some(cache) = &self.cache {
            cache.set(key, resolved.clone()).await;
        }

        Ok(resolved)
    }

    async fn lookup(&self, query: &PlaceQuery) -> Result<Option<PlaceRecord>, AnalyzerError> {
        let search_text = self.search_text(query);
        let candidates = self.provider.text_search(&search_text).await?;

        let candidate = match candidates.into_iter().next() {
            Some(candidate) => candidate,
            None => {
                log::info!("No place found for {:?}", search_text);
                return Ok(None);
            }
        };

        let details = self.provider.place_details(&candidate.place_id).await?;
        let record = PlaceRecord::from_details(&candidate, details);

        log::info!(
            "Resolved {:?} to {} ({})",
            search_text,
            record.name,
            record.place_id
        );
        Ok(Some(record))
    }
}
