//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Report presentation configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Remote date service configuration.
    #[serde(default)]
    pub date_service: DateServiceConfig,
    /// Shell asset cache configuration.
    #[serde(default)]
    pub assets: AssetsConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Report presentation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Currency code used when a request does not name one.
    #[serde(default = "default_currency")]
    pub default_currency: String,
    /// IANA timezone for report dates. Falls back to `TZ`, then UTC.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Product name printed in banners.
    #[serde(default = "default_product_name")]
    pub product_name: String,
    /// Publisher printed in banners, footers, and the disclaimer.
    #[serde(default = "default_publisher")]
    pub publisher: String,
}

fn default_currency() -> String {
    "BDT".to_string()
}

fn default_product_name() -> String {
    "ZAKAH CALCULATOR".to_string()
}

fn default_publisher() -> String {
    "Samin's Initiatives".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            timezone: None,
            product_name: default_product_name(),
            publisher: default_publisher(),
        }
    }
}

/// Remote date service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DateServiceConfig {
    /// Endpoint returning the current time for a `timeZone` query parameter.
    #[serde(default = "default_date_url")]
    pub url: String,
    /// Seconds to wait before falling back to the local clock.
    #[serde(default = "default_date_timeout")]
    pub timeout_secs: u64,
}

fn default_date_url() -> String {
    "https://timeapi.io/api/time/current/zone".to_string()
}

fn default_date_timeout() -> u64 {
    5
}

impl Default for DateServiceConfig {
    fn default() -> Self {
        Self {
            url: default_date_url(),
            timeout_secs: default_date_timeout(),
        }
    }
}

/// Shell asset cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Upstream origin serving the app shell. The asset route is disabled when unset.
    #[serde(default)]
    pub origin: Option<String>,
    /// Cache generation; bump on deploy to invalidate previous caches.
    #[serde(default = "default_cache_generation")]
    pub cache_generation: u32,
    /// Shell resources precached on install.
    #[serde(default = "default_shell_assets")]
    pub shell_assets: Vec<String>,
    /// Data files served network-first.
    #[serde(default = "default_data_assets")]
    pub data_assets: Vec<String>,
    /// Hosts whose resources are served stale-while-revalidate.
    #[serde(default = "default_font_hosts")]
    pub font_hosts: Vec<String>,
    /// Cached shell entry returned when a cache-first request cannot reach the network.
    #[serde(default = "default_offline_fallback")]
    pub offline_fallback: String,
}

fn default_cache_generation() -> u32 {
    3
}

fn default_shell_assets() -> Vec<String> {
    vec![
        "index.html".to_string(),
        "styles.css".to_string(),
        "translations/en.js".to_string(),
        "translations/bn.js".to_string(),
        "manifest.json".to_string(),
    ]
}

fn default_data_assets() -> Vec<String> {
    vec!["data/rates.json".to_string(), "data/metals.json".to_string()]
}

fn default_font_hosts() -> Vec<String> {
    vec![
        "fonts.googleapis.com".to_string(),
        "fonts.gstatic.com".to_string(),
    ]
}

fn default_offline_fallback() -> String {
    "index.html".to_string()
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            origin: None,
            cache_generation: default_cache_generation(),
            shell_assets: default_shell_assets(),
            data_assets: default_data_assets(),
            font_hosts: default_font_hosts(),
            offline_fallback: default_offline_fallback(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("ZAKAH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_without_sources() {
        temp_env::with_vars_unset(
            [
                "ZAKAH__SERVER__PORT",
                "ZAKAH__REPORT__DEFAULT_CURRENCY",
                "ZAKAH__DATE_SERVICE__TIMEOUT_SECS",
            ],
            || {
                let config = AppConfig::load().expect("defaults should load");
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.server.host, "0.0.0.0");
                assert_eq!(config.report.default_currency, "BDT");
                assert_eq!(config.date_service.timeout_secs, 5);
                assert_eq!(config.assets.cache_generation, 3);
                assert!(config.assets.origin.is_none());
            },
        );
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("ZAKAH__SERVER__PORT", Some("9090")),
                ("ZAKAH__REPORT__DEFAULT_CURRENCY", Some("USD")),
                ("ZAKAH__REPORT__TIMEZONE", Some("Asia/Dhaka")),
                ("ZAKAH__DATE_SERVICE__TIMEOUT_SECS", Some("2")),
            ],
            || {
                let config = AppConfig::load().expect("env config should load");
                assert_eq!(config.server.port, 9090);
                assert_eq!(config.report.default_currency, "USD");
                assert_eq!(config.report.timezone.as_deref(), Some("Asia/Dhaka"));
                assert_eq!(config.date_service.timeout_secs, 2);
            },
        );
    }

    #[test]
    fn test_default_asset_lists() {
        let assets = AssetsConfig::default();
        assert_eq!(assets.data_assets, ["data/rates.json", "data/metals.json"]);
        assert!(assets.shell_assets.contains(&"index.html".to_string()));
        assert!(assets.font_hosts.iter().any(|h| h == "fonts.gstatic.com"));
    }
}
