//! Shell cache lifecycle and request handling.

use std::sync::Arc;

use moka::sync::Cache;
use tracing::{debug, info, warn};

use super::policy::CachePolicy;
use super::storage::CacheStorage;
use super::types::{AssetFetcher, AssetResponse, FetchError, Strategy};

/// Serves shell assets through generation-named caches.
#[derive(Clone)]
pub struct AssetCache {
    policy: Arc<CachePolicy>,
    storage: Arc<CacheStorage>,
    fetcher: Arc<dyn AssetFetcher>,
}

impl AssetCache {
    /// Creates a cache over `storage`, fetching misses through `fetcher`.
    #[must_use]
    pub fn new(
        policy: CachePolicy,
        storage: Arc<CacheStorage>,
        fetcher: Arc<dyn AssetFetcher>,
    ) -> Self {
        Self {
            policy: Arc::new(policy),
            storage,
            fetcher,
        }
    }

    /// Policy in use.
    #[must_use]
    pub fn policy(&self) -> &CachePolicy {
        &self.policy
    }

    /// Precaches every shell asset.
    ///
    /// All or nothing: if any asset fails or returns a non-success status,
    /// nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`] encountered.
    pub async fn install(&self) -> Result<usize, FetchError> {
        let mut fetched = Vec::with_capacity(self.policy.shell_assets.len());
        for key in &self.policy.shell_assets {
            let response = self.fetcher.fetch(key).await?;
            if !response.is_ok() {
                return Err(FetchError::BadStatus {
                    key: key.clone(),
                    status: response.status,
                });
            }
            fetched.push((key.clone(), response));
        }

        let cache = self.storage.open(&self.policy.shell_cache_name());
        let count = fetched.len();
        for (key, response) in fetched {
            cache.insert(key, response);
        }
        info!(
            cache = %self.policy.shell_cache_name(),
            assets = count,
            "shell assets precached"
        );
        Ok(count)
    }

    /// Deletes every cache outside the current generation. Returns the names deleted.
    pub fn activate(&self) -> Vec<String> {
        let stale: Vec<String> = self
            .storage
            .keys()
            .into_iter()
            .filter(|name| !self.policy.is_current(name))
            .collect();
        for name in &stale {
            self.storage.delete(name);
        }
        if !stale.is_empty() {
            info!(purged = ?stale, "stale asset caches purged");
        }
        stale
    }

    /// Serves `key` with the strategy its policy assigns.
    pub async fn handle(&self, key: &str) -> AssetResponse {
        let strategy = self.policy.classify(key);
        debug!(key, ?strategy, "asset request");
        match strategy {
            Strategy::NetworkFirst => self.network_first(key).await,
            Strategy::StaleWhileRevalidate => self.stale_while_revalidate(key).await,
            Strategy::CacheFirst => self.cache_first(key).await,
        }
    }

    async fn network_first(&self, key: &str) -> AssetResponse {
        let cache = self.storage.open(&self.policy.data_cache_name());
        match self.fetcher.fetch(key).await {
            Ok(response) => {
                store_if_ok(&cache, key, &response);
                response
            }
            Err(err) => {
                warn!(key, error = %err, "network-first fetch failed, using cache");
                cache.get(key).unwrap_or_else(AssetResponse::offline_json)
            }
        }
    }

    async fn cache_first(&self, key: &str) -> AssetResponse {
        if let Some(cached) = self.storage.match_any(key) {
            return cached;
        }
        match self.fetcher.fetch(key).await {
            Ok(response) => {
                let cache = self.storage.open(&self.policy.shell_cache_name());
                store_if_ok(&cache, key, &response);
                response
            }
            Err(err) => {
                warn!(key, error = %err, "cache-first fetch failed, serving offline fallback");
                self.storage
                    .match_any(&self.policy.offline_fallback)
                    .unwrap_or_else(AssetResponse::offline_text)
            }
        }
    }

    async fn stale_while_revalidate(&self, key: &str) -> AssetResponse {
        let cache = self.storage.open(&self.policy.shell_cache_name());
        if let Some(cached) = cache.get(key) {
            let fetcher = Arc::clone(&self.fetcher);
            let key = key.to_string();
            tokio::spawn(async move {
                match fetcher.fetch(&key).await {
                    Ok(response) => store_if_ok(&cache, &key, &response),
                    Err(err) => debug!(key = %key, error = %err, "background revalidation failed"),
                }
            });
            return cached;
        }
        match self.fetcher.fetch(key).await {
            Ok(response) => {
                store_if_ok(&cache, key, &response);
                response
            }
            Err(err) => {
                warn!(key, error = %err, "revalidating fetch failed with nothing cached");
                AssetResponse::offline_text()
            }
        }
    }
}

fn store_if_ok(cache: &Cache<String, AssetResponse>, key: &str, response: &AssetResponse) {
    if response.is_ok() {
        cache.insert(key.to_string(), response.clone());
    }
}
