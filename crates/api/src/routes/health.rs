//! Service status endpoint.
//!
//! `GET /health` reports the build version, the currency used when a
//! request names none, whether a PDF export currently holds the export
//! gate, and the active shell cache generation when the asset route is on.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

/// Shell cache names for the running generation.
#[derive(Debug, Serialize)]
pub struct AssetCacheStatus {
    /// Cache holding precached shell resources.
    pub shell_cache: String,
    /// Cache holding network-first data files.
    pub data_cache: String,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `healthy` when the process answers.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Currency applied when a report request omits one.
    pub default_currency: String,
    /// True while a PDF export is in progress.
    pub export_in_progress: bool,
    /// `None` when the asset route is disabled.
    pub asset_cache: Option<AssetCacheStatus>,
}

impl HealthResponse {
    fn from_state(state: &AppState) -> Self {
        let asset_cache = state.assets.as_ref().map(|cache| {
            let policy = cache.policy();
            AssetCacheStatus {
                shell_cache: policy.shell_cache_name(),
                data_cache: policy.data_cache_name(),
            }
        });
        Self {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
            default_currency: state.default_currency.to_string(),
            export_in_progress: state.export_gate.try_lock().is_err(),
            asset_cache,
        }
    }
}

async fn service_status(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::from_state(&state))
}

/// Creates the status route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(service_status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;
    use zakah_core::date::DateResolver;
    use zakah_core::report::{ReportComposer, ZakahReportService};
    use zakah_core::shell_cache::{
        AssetCache, AssetFetcher, AssetResponse, CachePolicy, CacheStorage, FetchError,
    };
    use zakah_shared::CurrencyCode;
    use zakah_shared::config::AssetsConfig;

    struct UnreachableOrigin;

    #[async_trait]
    impl AssetFetcher for UnreachableOrigin {
        async fn fetch(&self, _key: &str) -> Result<AssetResponse, FetchError> {
            Err(FetchError::Network("unreachable".to_string()))
        }
    }

    fn state(currency: &str) -> AppState {
        let service = ZakahReportService::new(
            ReportComposer::default(),
            DateResolver::local(chrono_tz::Tz::UTC),
        );
        AppState::new(service, CurrencyCode::from_str(currency).unwrap())
    }

    async fn get_status(state: AppState) -> Value {
        let response = Router::new()
            .merge(routes())
            .with_state(state)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_status_without_assets() {
        let json = get_status(state("USD")).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(json["default_currency"], "USD");
        assert_eq!(json["export_in_progress"], false);
        assert!(json["asset_cache"].is_null());
    }

    #[tokio::test]
    async fn test_status_reports_cache_generation() {
        let config = AssetsConfig {
            cache_generation: 7,
            ..AssetsConfig::default()
        };
        let cache = AssetCache::new(
            CachePolicy::from_config(&config),
            Arc::new(CacheStorage::new()),
            Arc::new(UnreachableOrigin),
        );
        let json = get_status(state("BDT").with_assets(cache)).await;
        assert_eq!(json["asset_cache"]["shell_cache"], "zakah-calc-v7");
        assert_eq!(json["asset_cache"]["data_cache"], "zakah-data-v7");
    }

    #[tokio::test]
    async fn test_status_shows_running_export() {
        let state = state("BDT");
        let _held = state.export_gate.lock().await;
        let json = get_status(state.clone()).await;
        assert_eq!(json["export_in_progress"], true);
    }
}
