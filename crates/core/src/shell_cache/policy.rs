//! Cache naming and request classification.

use zakah_shared::config::AssetsConfig;

use super::types::Strategy;

/// Which cache a request uses and how it is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePolicy {
    /// Generation number embedded in cache names.
    pub generation: u32,
    /// Resources precached on install.
    pub shell_assets: Vec<String>,
    /// Network-first data files.
    pub data_assets: Vec<String>,
    /// Hosts served stale-while-revalidate.
    pub font_hosts: Vec<String>,
    /// Cached entry returned when a cache-first request is offline.
    pub offline_fallback: String,
}

impl CachePolicy {
    /// Builds the policy from configuration.
    #[must_use]
    pub fn from_config(config: &AssetsConfig) -> Self {
        Self {
            generation: config.cache_generation,
            shell_assets: config.shell_assets.clone(),
            data_assets: config.data_assets.clone(),
            font_hosts: config.font_hosts.clone(),
            offline_fallback: config.offline_fallback.clone(),
        }
    }

    /// Name of the shell cache for this generation.
    #[must_use]
    pub fn shell_cache_name(&self) -> String {
        format!("zakah-calc-v{}", self.generation)
    }

    /// Name of the data cache for this generation.
    #[must_use]
    pub fn data_cache_name(&self) -> String {
        format!("zakah-data-v{}", self.generation)
    }

    /// Whether `name` belongs to the current generation.
    #[must_use]
    pub fn is_current(&self, name: &str) -> bool {
        name == self.shell_cache_name() || name == self.data_cache_name()
    }

    /// Strategy for the request `key`.
    #[must_use]
    pub fn classify(&self, key: &str) -> Strategy {
        if self
            .data_assets
            .iter()
            .any(|asset| key.contains(asset.trim_start_matches("./")))
        {
            return Strategy::NetworkFirst;
        }
        if let Some(host) = host_of(key) {
            if self.font_hosts.iter().any(|h| host.contains(h.as_str())) {
                return Strategy::StaleWhileRevalidate;
            }
        }
        Strategy::CacheFirst
    }
}

/// Host of an absolute URL; `None` for relative keys.
fn host_of(key: &str) -> Option<&str> {
    let (_, rest) = key.split_once("://")?;
    let end = rest.find(['/', '?', '#', ':']).unwrap_or(rest.len());
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn policy() -> CachePolicy {
        CachePolicy::from_config(&AssetsConfig::default())
    }

    #[test]
    fn test_cache_names() {
        let policy = policy();
        assert_eq!(policy.shell_cache_name(), "zakah-calc-v3");
        assert_eq!(policy.data_cache_name(), "zakah-data-v3");
        assert!(policy.is_current("zakah-data-v3"));
        assert!(!policy.is_current("zakah-calc-v2"));
    }

    #[rstest]
    #[case("index.html", Strategy::CacheFirst)]
    #[case("styles.css", Strategy::CacheFirst)]
    #[case("data/rates.json", Strategy::NetworkFirst)]
    #[case("data/metals.json?t=1", Strategy::NetworkFirst)]
    #[case("https://fonts.googleapis.com/css2?family=Amiri", Strategy::StaleWhileRevalidate)]
    #[case("https://fonts.gstatic.com/s/amiri.woff2", Strategy::StaleWhileRevalidate)]
    #[case("https://cdn.example.com/fonts.googleapis.com.js", Strategy::CacheFirst)]
    fn test_classify(#[case] key: &str, #[case] expected: Strategy) {
        assert_eq!(policy().classify(key), expected);
    }

    #[test]
    fn test_host_of() {
        assert_eq!(host_of("https://a.b:443/x"), Some("a.b"));
        assert_eq!(host_of("index.html"), None);
    }
}
