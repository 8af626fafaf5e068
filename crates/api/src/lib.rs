//! HTTP API layer with Axum routes and network adapters.
//!
//! This crate provides:
//! - REST API routes for report summaries and PDF export
//! - The shell asset route
//! - reqwest adapters for the core's date and asset-origin ports

pub mod adapters;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use zakah_core::report::ZakahReportService;
use zakah_core::shell_cache::AssetCache;
use zakah_shared::CurrencyCode;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Aggregation and export service.
    pub report_service: Arc<ZakahReportService>,
    /// Serializes PDF exports; held for the whole export pass.
    pub export_gate: Arc<Mutex<()>>,
    /// Currency used when a request does not name one.
    pub default_currency: CurrencyCode,
    /// Shell asset cache (optional; the asset route is off without it).
    pub assets: Option<Arc<AssetCache>>,
}

impl AppState {
    /// Creates state without an asset cache.
    #[must_use]
    pub fn new(report_service: ZakahReportService, default_currency: CurrencyCode) -> Self {
        Self {
            report_service: Arc::new(report_service),
            export_gate: Arc::new(Mutex::new(())),
            default_currency,
            assets: None,
        }
    }

    /// Enables the shell asset route.
    #[must_use]
    pub fn with_assets(mut self, assets: AssetCache) -> Self {
        self.assets = Some(Arc::new(assets));
        self
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new().nest("/api/v1", routes::api_routes());
    if state.assets.is_some() {
        router = router.merge(routes::assets::routes());
    }
    router
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
