//! Shell cache types and the origin port.

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::json;
use thiserror::Error;

/// How a request is served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Cache, then network, then the offline fallback.
    CacheFirst,
    /// Network, then cache, then an offline JSON payload.
    NetworkFirst,
    /// Cached copy now, refreshed in the background.
    StaleWhileRevalidate,
}

/// A cached or fetched response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResponse {
    /// HTTP status.
    pub status: u16,
    /// `Content-Type`, when known.
    pub content_type: Option<String>,
    /// Body.
    pub body: Bytes,
}

impl AssetResponse {
    /// Creates a response.
    #[must_use]
    pub fn new(status: u16, content_type: Option<String>, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    /// Whether the status is 2xx. Only these are cached.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// `{"error":"offline"}` for data requests that reach neither network nor cache.
    #[must_use]
    pub fn offline_json() -> Self {
        Self::new(
            200,
            Some("application/json".to_string()),
            json!({ "error": "offline" }).to_string(),
        )
    }

    /// Plain 503 for shell requests with no fallback.
    #[must_use]
    pub fn offline_text() -> Self {
        Self::new(
            503,
            Some("text/plain; charset=utf-8".to_string()),
            "App is offline",
        )
    }
}

/// Origin fetch failures. HTTP error statuses are responses, not errors.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The origin could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The request key does not form a valid URL.
    #[error("invalid asset url: {0}")]
    InvalidUrl(String),

    /// Precaching got a non-success status.
    #[error("asset {key} returned status {status}")]
    BadStatus {
        /// Request key.
        key: String,
        /// Status received.
        status: u16,
    },
}

/// Fetches assets from the origin.
///
/// Keys are either paths relative to the origin or absolute URLs.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Fetches `key`.
    async fn fetch(&self, key: &str) -> Result<AssetResponse, FetchError>;
}
