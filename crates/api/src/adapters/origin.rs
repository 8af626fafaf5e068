//! Asset origin over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::CONTENT_TYPE;
use zakah_core::shell_cache::{AssetFetcher, AssetResponse, FetchError};

/// [`AssetFetcher`] that resolves relative keys against an origin URL.
pub struct OriginFetcher {
    client: reqwest::Client,
    base: Url,
}

impl OriginFetcher {
    /// Creates a fetcher for `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] for a malformed origin and
    /// [`FetchError::Network`] if the client cannot be built.
    pub fn new(origin: &str, timeout: Duration) -> Result<Self, FetchError> {
        let mut base = Url::parse(origin).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self { client, base })
    }

    /// Absolute URL for `key`.
    pub(crate) fn resolve(&self, key: &str) -> Result<Url, FetchError> {
        if key.starts_with("http://") || key.starts_with("https://") {
            return Url::parse(key).map_err(|e| FetchError::InvalidUrl(e.to_string()));
        }
        self.base
            .join(key.trim_start_matches("./"))
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))
    }
}

#[async_trait]
impl AssetFetcher for OriginFetcher {
    async fn fetch(&self, key: &str) -> Result<AssetResponse, FetchError> {
        let url = self.resolve(key)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(AssetResponse::new(status, content_type, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher(origin: &str) -> OriginFetcher {
        OriginFetcher::new(origin, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_resolve_relative_keys() {
        let f = fetcher("https://example.org/zakah");
        assert_eq!(
            f.resolve("index.html").unwrap().as_str(),
            "https://example.org/zakah/index.html"
        );
        assert_eq!(
            f.resolve("./data/rates.json").unwrap().as_str(),
            "https://example.org/zakah/data/rates.json"
        );
    }

    #[test]
    fn test_resolve_absolute_keys() {
        let f = fetcher("https://example.org/");
        assert_eq!(
            f.resolve("https://fonts.gstatic.com/a.woff2").unwrap().host_str(),
            Some("fonts.gstatic.com")
        );
    }

    #[test]
    fn test_invalid_origin() {
        assert!(matches!(
            OriginFetcher::new("not a url", Duration::from_secs(1)),
            Err(FetchError::InvalidUrl(_))
        ));
    }
}
