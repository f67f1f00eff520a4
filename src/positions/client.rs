use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Client, Url};

use super::error::PositionError;
use super::types::{RawPosition, Units};

const HOUR_SECONDS: i64 = 3600;

/// Client for the batched position endpoint of the tracking service.
#[derive(Debug, Clone)]
pub struct PositionClient {
    http: Client,
    base_url: String,
    catalog_id: u32,
    timeout: Duration,
}

impl PositionClient {
    pub fn new(http: Client, base_url: &str, catalog_id: u32, timeout: Duration) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            catalog_id,
            timeout,
        }
    }

    /// Fetch `count` positions spaced one hour apart, the first truncated to
    /// the top of the hour containing `starting_at`. Issues exactly one GET;
    /// a transport failure or non-2xx status fails the whole batch.
    pub async fn fetch_positions(
        &self,
        starting_at: DateTime<Utc>,
        count: usize,
    ) -> Result<Vec<RawPosition>, PositionError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let timestamps = hourly_timestamps(starting_at, count)
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let url = format!(
            "{}/satellites/{}/positions",
            self.base_url, self.catalog_id
        );
        let url = Url::parse(&url).map_err(|e| PositionError::InvalidUrl(e.to_string()))?;

        let response = self
            .http
            .get(url)
            .query(&[
                ("units", Units::Kilometers.as_str()),
                ("timestamps", timestamps.as_str()),
            ])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PositionError::FailedRequest {
                status,
                body: response.text().await?,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(PositionError::Decode)
    }
}

/// The instants addressed by one batch: `count` epoch seconds spaced exactly
/// one hour apart, starting at the top of the hour containing `starting_at`.
pub fn hourly_timestamps(starting_at: DateTime<Utc>, count: usize) -> Vec<i64> {
    let first = starting_at.timestamp() - starting_at.timestamp().rem_euclid(HOUR_SECONDS);
    (0..count as i64).map(|i| first + i * HOUR_SECONDS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn truncates_to_top_of_hour() {
        let start = Utc.with_ymd_and_hms(2022, 11, 12, 16, 42, 17).unwrap();
        let timestamps = hourly_timestamps(start, 3);
        assert_eq!(timestamps, vec![1668268800, 1668272400, 1668276000]);
    }

    #[test]
    fn already_truncated_instant_is_kept() {
        let start = Utc.with_ymd_and_hms(2022, 11, 12, 16, 0, 0).unwrap();
        assert_eq!(hourly_timestamps(start, 1), vec![1668268800]);
    }

    #[test]
    fn spacing_is_exactly_one_hour() {
        let start = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap();
        let timestamps = hourly_timestamps(start, 10);
        assert_eq!(timestamps.len(), 10);
        for pair in timestamps.windows(2) {
            assert_eq!(pair[1] - pair[0], 3600);
        }
    }

    #[test]
    fn zero_count_yields_no_timestamps() {
        assert!(hourly_timestamps(Utc::now(), 0).is_empty());
    }
}
