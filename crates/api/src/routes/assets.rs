//! Shell asset route.
//!
//! `GET /assets/{*path}` serves the app shell through the [`AssetCache`],
//! which picks cache-first, network-first, or stale-while-revalidate per key.
//!
//! [`AssetCache`]: zakah_core::shell_cache::AssetCache

use axum::{
    Router,
    body::Body,
    extract::{Path, RawQuery, State},
    http::{StatusCode, header},
    response::Response,
    routing::get,
};
use tracing::debug;
use zakah_core::shell_cache::AssetResponse;
use zakah_shared::AppError;

use crate::AppState;
use crate::error::error_response;

/// Creates the asset routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/assets/{*path}", get(serve_asset))
}

/// GET `/assets/{*path}` - Shell asset through the cache.
async fn serve_asset(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    let Some(assets) = state.assets.as_ref() else {
        return error_response(&AppError::NotFound("Asset route is disabled".to_string()));
    };

    let key = match query {
        Some(q) if !q.is_empty() => format!("{path}?{q}"),
        _ => path,
    };
    let response = assets.handle(&key).await;
    debug!(key = %key, status = response.status, "Asset served");
    into_http(response)
}

fn into_http(asset: AssetResponse) -> Response {
    let status = StatusCode::from_u16(asset.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut builder = Response::builder().status(status);
    if let Some(content_type) = asset.content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder
        .body(Body::from(asset.body))
        .unwrap_or_else(|e| error_response(&AppError::Internal(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use zakah_core::date::DateResolver;
    use zakah_core::report::{ReportComposer, ZakahReportService};
    use zakah_core::shell_cache::{
        AssetCache, AssetFetcher, CachePolicy, CacheStorage, FetchError,
    };
    use zakah_shared::config::AssetsConfig;
    use zakah_shared::{CurrencyCode, GENERIC_FAILURE_MESSAGE};

    #[derive(Default)]
    struct StubOrigin {
        files: HashMap<String, String>,
        offline: AtomicBool,
    }

    #[async_trait]
    impl AssetFetcher for StubOrigin {
        async fn fetch(&self, key: &str) -> Result<AssetResponse, FetchError> {
            if self.offline.load(Ordering::SeqCst) {
                return Err(FetchError::Network("offline".to_string()));
            }
            Ok(match self.files.get(key) {
                Some(body) => AssetResponse::new(200, Some("text/html".to_string()), body.clone()),
                None => AssetResponse::new(404, None, "not found"),
            })
        }
    }

    async fn app(origin: Arc<StubOrigin>) -> Router {
        let config = AssetsConfig::default();
        let cache = AssetCache::new(
            CachePolicy::from_config(&config),
            Arc::new(CacheStorage::new()),
            origin,
        );
        cache.install().await.unwrap();

        let service = ZakahReportService::new(
            ReportComposer::default(),
            DateResolver::local(chrono_tz::Tz::UTC),
        );
        let state = AppState::new(service, CurrencyCode::default()).with_assets(cache);
        Router::new().merge(routes()).with_state(state)
    }

    fn origin() -> StubOrigin {
        let mut origin = StubOrigin::default();
        for key in AssetsConfig::default().shell_assets {
            origin.files.insert(key.clone(), format!("shell {key}"));
        }
        origin
    }

    async fn get_uri(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_serves_precached_shell() {
        let app = app(Arc::new(origin())).await;
        let (status, body) = get_uri(app, "/assets/index.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "shell index.html");
    }

    #[tokio::test]
    async fn test_offline_miss_falls_back_to_index() {
        let origin = Arc::new(origin());
        let app = app(Arc::clone(&origin)).await;
        origin.offline.store(true, Ordering::SeqCst);

        let (status, body) = get_uri(app, "/assets/unknown/page.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "shell index.html");
    }

    #[tokio::test]
    async fn test_offline_data_file_returns_offline_json() {
        let origin = Arc::new(origin());
        let app = app(Arc::clone(&origin)).await;
        origin.offline.store(true, Ordering::SeqCst);

        let (status, body) = get_uri(app, "/assets/data/rates.json?v=2").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["error"], "offline");
    }

    #[tokio::test]
    async fn test_unusable_content_type_becomes_internal_error() {
        let asset = AssetResponse::new(200, Some("text/html\nx-bad".to_string()), "body");
        let response = into_http(asset);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "INTERNAL_ERROR");
        assert_eq!(json["message"], GENERIC_FAILURE_MESSAGE);
    }
}
