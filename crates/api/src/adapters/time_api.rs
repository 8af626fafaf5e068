//! Remote wall-clock lookup over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::debug;
use zakah_core::date::{DateError, DateSource};

/// Format of the `dateTime` field: local time, no offset.
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrentTimeResponse {
    date_time: String,
}

/// [`DateSource`] backed by a `?timeZone=<IANA>` time endpoint.
pub struct TimeApiClient {
    client: reqwest::Client,
    url: String,
}

impl TimeApiClient {
    /// Creates a client for `url` with a request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Request`] if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DateError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DateError::Request(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

/// Parses the service's local `dateTime` string.
pub(crate) fn parse_date_time(raw: &str) -> Result<NaiveDateTime, DateError> {
    NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT)
        .map_err(|e| DateError::InvalidResponse(format!("{raw}: {e}")))
}

#[async_trait]
impl DateSource for TimeApiClient {
    async fn now_in(&self, zone: Tz) -> Result<NaiveDateTime, DateError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("timeZone", zone.name())])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| DateError::Request(e.to_string()))?;

        let body: CurrentTimeResponse = response
            .json()
            .await
            .map_err(|e| DateError::InvalidResponse(e.to_string()))?;
        debug!(zone = %zone, date_time = %body.date_time, "date service response");

        parse_date_time(&body.date_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use rstest::rstest;

    #[rstest]
    #[case("2026-03-20T10:30:00.1234567")]
    #[case("2026-03-20T10:30:00")]
    #[case("2026-03-20T10:30:00.5")]
    fn test_parse_date_time(#[case] raw: &str) {
        let parsed = parse_date_time(raw).unwrap();
        assert_eq!(parsed.year(), 2026);
        assert_eq!(parsed.day(), 20);
        assert_eq!(parsed.hour(), 10);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_date_time("yesterday"),
            Err(DateError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_response_shape() {
        let body: CurrentTimeResponse = serde_json::from_str(
            r#"{"year":2026,"dateTime":"2026-03-20T10:30:00","timeZone":"Asia/Dhaka"}"#,
        )
        .unwrap();
        assert_eq!(body.date_time, "2026-03-20T10:30:00");
    }
}
