//! Date source port and resolver with fallback.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from a [`DateSource`].
#[derive(Debug, Error)]
pub enum DateError {
    /// The lookup did not complete in time.
    #[error("date lookup timed out after {0:?}")]
    Timeout(Duration),

    /// Transport failure.
    #[error("date request failed: {0}")]
    Request(String),

    /// The service answered with something unusable.
    #[error("invalid date response: {0}")]
    InvalidResponse(String),
}

/// Remote wall-clock lookup.
#[async_trait]
pub trait DateSource: Send + Sync {
    /// Current local date and time in `zone`.
    async fn now_in(&self, zone: Tz) -> Result<NaiveDateTime, DateError>;
}

/// Date strings printed on a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDate {
    /// Human-readable form, e.g. `Friday, 16 October 2026 (+06)`.
    pub display: String,
    /// `YYYY-MM-DD`.
    pub iso: String,
}

impl ReportDate {
    /// Formats `local` as wall-clock time in `zone`.
    #[must_use]
    pub fn from_local(local: NaiveDateTime, zone: Tz) -> Self {
        let abbreviation = zone
            .from_local_datetime(&local)
            .earliest()
            .map_or_else(|| zone.name().to_string(), |dt| dt.format("%Z").to_string());
        Self {
            display: format!("{} ({abbreviation})", local.format("%A, %-d %B %Y")),
            iso: local.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Resolves the report date through an optional [`DateSource`].
#[derive(Clone)]
pub struct DateResolver {
    source: Option<Arc<dyn DateSource>>,
    zone: Tz,
    timeout: Duration,
}

impl DateResolver {
    /// Resolver backed by a remote source.
    #[must_use]
    pub fn new(source: Arc<dyn DateSource>, zone: Tz, timeout: Duration) -> Self {
        Self {
            source: Some(source),
            zone,
            timeout,
        }
    }

    /// Resolver that always uses the local clock.
    #[must_use]
    pub const fn local(zone: Tz) -> Self {
        Self {
            source: None,
            zone,
            timeout: Duration::ZERO,
        }
    }

    /// Timezone dates are resolved in.
    #[must_use]
    pub const fn zone(&self) -> Tz {
        self.zone
    }

    /// Resolves the report date. Never fails.
    pub async fn resolve(&self) -> ReportDate {
        let local = match self.lookup().await {
            Ok(local) => {
                debug!(zone = %self.zone, "report date from remote source");
                local
            }
            Err(err) => {
                if self.source.is_some() {
                    warn!(zone = %self.zone, error = %err, "date lookup failed, using local clock");
                }
                self.local_now()
            }
        };
        ReportDate::from_local(local, self.zone)
    }

    async fn lookup(&self) -> Result<NaiveDateTime, DateError> {
        let Some(source) = &self.source else {
            return Err(DateError::Request("no date source configured".to_string()));
        };
        tokio::time::timeout(self.timeout, source.now_in(self.zone))
            .await
            .map_err(|_| DateError::Timeout(self.timeout))?
    }

    fn local_now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.zone).naive_local()
    }
}

/// Picks the report timezone: `configured`, then `env_tz`, then UTC.
///
/// Unknown names are skipped with a warning.
#[must_use]
pub fn resolve_zone_from(configured: Option<&str>, env_tz: Option<&str>) -> Tz {
    [configured, env_tz]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .find_map(|name| match name.parse::<Tz>() {
            Ok(zone) => Some(zone),
            Err(_) => {
                warn!(timezone = name, "unknown timezone ignored");
                None
            }
        })
        .unwrap_or(Tz::UTC)
}

/// [`resolve_zone_from`] with the process `TZ` variable.
#[must_use]
pub fn resolve_zone(configured: Option<&str>) -> Tz {
    let env_tz = std::env::var("TZ").ok();
    resolve_zone_from(configured, env_tz.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    struct FixedSource(NaiveDateTime);

    #[async_trait]
    impl DateSource for FixedSource {
        async fn now_in(&self, _zone: Tz) -> Result<NaiveDateTime, DateError> {
            Ok(self.0)
        }
    }

    struct FailingSource;

    #[async_trait]
    impl DateSource for FailingSource {
        async fn now_in(&self, _zone: Tz) -> Result<NaiveDateTime, DateError> {
            Err(DateError::Request("connection refused".to_string()))
        }
    }

    struct SlowSource;

    #[async_trait]
    impl DateSource for SlowSource {
        async fn now_in(&self, _zone: Tz) -> Result<NaiveDateTime, DateError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Err(DateError::InvalidResponse("unreachable".to_string()))
        }
    }

    fn fixed() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 20)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_report_date_format() {
        let date = ReportDate::from_local(fixed(), chrono_tz::Asia::Dhaka);
        assert_eq!(date.iso, "2026-03-20");
        assert_eq!(date.display, "Friday, 20 March 2026 (+06)");
    }

    #[test]
    fn test_report_date_utc() {
        let date = ReportDate::from_local(fixed(), Tz::UTC);
        assert_eq!(date.display, "Friday, 20 March 2026 (UTC)");
    }

    #[tokio::test]
    async fn test_resolve_uses_remote_value() {
        let resolver = DateResolver::new(
            Arc::new(FixedSource(fixed())),
            Tz::UTC,
            Duration::from_secs(5),
        );
        assert_eq!(resolver.resolve().await.iso, "2026-03-20");
    }

    #[tokio::test]
    async fn test_resolve_falls_back_on_error() {
        let resolver = DateResolver::new(Arc::new(FailingSource), Tz::UTC, Duration::from_secs(5));
        let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
        let date = resolver.resolve().await;
        // tolerate a midnight rollover between the two clock reads
        assert!(date.iso == today || date.iso > today);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolve_falls_back_on_timeout() {
        let resolver = DateResolver::new(Arc::new(SlowSource), Tz::UTC, Duration::from_secs(5));
        let date = resolver.resolve().await;
        assert_eq!(date.iso.len(), 10);
    }

    #[tokio::test]
    async fn test_local_resolver() {
        let date = DateResolver::local(Tz::UTC).resolve().await;
        assert!(date.display.ends_with("(UTC)"));
    }

    #[test]
    fn test_resolve_zone_precedence() {
        assert_eq!(
            resolve_zone_from(Some("Asia/Dhaka"), Some("Europe/London")),
            chrono_tz::Asia::Dhaka
        );
        assert_eq!(
            resolve_zone_from(None, Some("Europe/London")),
            chrono_tz::Europe::London
        );
        assert_eq!(
            resolve_zone_from(Some("Mars/Olympus"), Some("Asia/Dhaka")),
            chrono_tz::Asia::Dhaka
        );
        assert_eq!(resolve_zone_from(Some("  "), None), Tz::UTC);
        assert_eq!(resolve_zone_from(None, None), Tz::UTC);
    }
}
