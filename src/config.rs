use std::time::Duration;

use serde::{Deserialize, Deserializer};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub satellite: SatelliteConfig,
    #[serde(default)]
    pub positions: PositionsConfig,
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    #[serde(default)]
    pub web: WebConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SatelliteConfig {
    /// Catalog id of the tracked object.
    #[serde(default = "default_catalog_id")]
    pub catalog_id: u32,
    /// Number of hourly positions requested per batch.
    #[serde(default = "default_batch_count")]
    pub batch_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PositionsConfig {
    #[serde(default = "default_positions_url")]
    pub base_url: String,
    #[serde(default = "default_timeout", deserialize_with = "parse_duration")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocoderConfig {
    #[serde(default = "default_geocoder_url")]
    pub base_url: String,
    #[serde(default = "default_timeout", deserialize_with = "parse_duration")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_catalog_id() -> u32 {
    // The International Space Station.
    25544
}

fn default_batch_count() -> usize {
    10
}

fn default_positions_url() -> String {
    "https://api.wheretheiss.at/v1".to_string()
}

fn default_geocoder_url() -> String {
    "https://photon.komoot.io".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn parse_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    humantime::parse_duration(s.trim()).map_err(serde::de::Error::custom)
}

impl Default for SatelliteConfig {
    fn default() -> Self {
        Self {
            catalog_id: default_catalog_id(),
            batch_count: default_batch_count(),
        }
    }
}

impl Default for PositionsConfig {
    fn default() -> Self {
        Self {
            base_url: default_positions_url(),
            timeout: default_timeout(),
        }
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoder_url(),
            timeout: default_timeout(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.satellite.catalog_id, 25544);
        assert_eq!(config.satellite.batch_count, 10);
        assert_eq!(config.web.bind, "0.0.0.0:8080");
        assert_eq!(config.positions.timeout, Duration::from_secs(30));
    }

    #[test]
    fn timeouts_accept_humantime_strings() {
        let config: Config = serde_yaml::from_str(
            "geocoder:\n  base_url: http://localhost:9000\n  timeout: 1500ms\n",
        )
        .unwrap();
        assert_eq!(config.geocoder.timeout, Duration::from_millis(1500));
        assert_eq!(config.geocoder.base_url, "http://localhost:9000");
    }
}
