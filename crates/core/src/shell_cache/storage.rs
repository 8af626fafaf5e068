//! Named in-memory caches.

use dashmap::DashMap;
use moka::sync::Cache;

use super::types::AssetResponse;

/// Default per-cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 512;

/// A set of named response caches.
///
/// Thread-safe; cache handles are cheap clones sharing storage.
pub struct CacheStorage {
    caches: DashMap<String, Cache<String, AssetResponse>>,
    capacity: u64,
}

impl Default for CacheStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheStorage {
    /// Creates empty storage with the default per-cache capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Creates empty storage with a custom per-cache capacity.
    #[must_use]
    pub fn with_capacity(capacity: u64) -> Self {
        Self {
            caches: DashMap::new(),
            capacity,
        }
    }

    /// Returns the cache called `name`, creating it if needed.
    pub fn open(&self, name: &str) -> Cache<String, AssetResponse> {
        self.caches
            .entry(name.to_string())
            .or_insert_with(|| Cache::builder().max_capacity(self.capacity).build())
            .clone()
    }

    /// Names of all caches.
    pub fn keys(&self) -> Vec<String> {
        let mut names: Vec<String> = self.caches.iter().map(|e| e.key().clone()).collect();
        names.sort();
        names
    }

    /// Drops the cache called `name`. Returns whether it existed.
    pub fn delete(&self, name: &str) -> bool {
        self.caches.remove(name).is_some()
    }

    /// Looks `key` up in every cache.
    pub fn match_any(&self, key: &str) -> Option<AssetResponse> {
        self.caches.iter().find_map(|entry| entry.value().get(key))
    }
}
