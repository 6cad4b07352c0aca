// src/services/cache.rs
// DOCUMENTATION: Session cache for resolved hotel lookups
// PURPOSE: Serve repeated identical queries without calling Google again

use crate::models::PlaceRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Cache key: exact (hotel name, location) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub name: String,
    pub location: String,
}

impl CacheKey {
    pub fn new(name: &str, location: &str) -> Self {
        Self {
            name: name.to_string(),
            location: location.to_string(),
        }
    }
}

/// In-memory cache that lives as long as the process
/// DOCUMENTATION: Thread-safe; entries are never evicted during a session.
/// A cached `None` remembers that the query found no hotel.
#[derive(Default)]
pub struct PlaceCache {
    store: RwLock<HashMap<CacheKey, Option<PlaceRecord>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PlaceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get cached outcome; the outer `None` is a miss
    pub async fn get(&self, key: &CacheKey) -> Option<Option<PlaceRecord>> {
        let store = self.store.read().await;

        match store.get(key) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                log::debug!("Cache HIT for key: {:?}", key);
                Some(entry.clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                log::debug!("Cache MISS for key: {:?}", key);
                None
            }
        }
    }

    /// Store an outcome for the rest of the session
    pub async fn set(&self, key: CacheKey, value: Option<PlaceRecord>) {
        let mut store = self.store.write().await;
        log::debug!("Cache SET for key: {:?}", key);
        store.insert(key, value);
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        let store = self.store.read().await;

        CacheStats {
            entries: store.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Clear all cache entries and counters
    pub async fn clear(&self) -> usize {
        let mut store = self.store.write().await;
        let count = store.len();
        store.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        log::info!("Cache cleared: {} entries removed", count);
        count
    }
}

/// Cache statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}
