//! Zakah Report Server
//!
//! Main entry point for the Zakah report service.

use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zakah_api::adapters::{OriginFetcher, TimeApiClient};
use zakah_api::{AppState, create_router};
use zakah_core::date::{DateResolver, resolve_zone};
use zakah_core::report::{Branding, ReportComposer, ZakahReportService};
use zakah_core::shell_cache::{AssetCache, AssetFetcher, CachePolicy, CacheStorage};
use zakah_shared::config::AssetsConfig;
use zakah_shared::{AppConfig, CurrencyCode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zakah=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Report date source
    let zone = resolve_zone(config.report.timezone.as_deref());
    let timeout = Duration::from_secs(config.date_service.timeout_secs);
    let dates = match TimeApiClient::new(config.date_service.url.clone(), timeout) {
        Ok(client) => DateResolver::new(Arc::new(client), zone, timeout),
        Err(e) => {
            warn!(error = %e, "Date service unavailable, using local clock");
            DateResolver::local(zone)
        }
    };
    info!(zone = %zone, url = %config.date_service.url, "Report dates configured");

    // Create report service
    let composer = ReportComposer::new(Branding {
        product_name: config.report.product_name.clone(),
        publisher: config.report.publisher.clone(),
    });
    let service = ZakahReportService::new(composer, dates);
    let currency: CurrencyCode = config.report.default_currency.parse()?;

    // Create application state
    let mut state = AppState::new(service, currency);
    if let Some(assets) = build_asset_cache(&config.assets).await {
        state = state.with_assets(assets);
    }

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds and primes the shell asset cache when an origin is configured.
///
/// A failed install leaves the cache empty; requests then fill it lazily.
async fn build_asset_cache(config: &AssetsConfig) -> Option<AssetCache> {
    let origin = config.origin.as_deref()?;
    let fetcher = match OriginFetcher::new(origin, Duration::from_secs(10)) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            warn!(origin, error = %e, "Invalid asset origin, asset route disabled");
            return None;
        }
    };

    let cache = AssetCache::new(
        CachePolicy::from_config(config),
        Arc::new(CacheStorage::new()),
        Arc::new(fetcher) as Arc<dyn AssetFetcher>,
    );
    match cache.install().await {
        Ok(count) => info!(origin, count, "Shell assets precached"),
        Err(e) => warn!(origin, error = %e, "Shell precache failed"),
    }
    let purged = cache.activate();
    if !purged.is_empty() {
        info!(?purged, "Purged stale asset caches");
    }
    Some(cache)
}
