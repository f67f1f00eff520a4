use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;

use super::resolver::{ReverseGeocoder, UNKNOWN_PLACE};

#[derive(Debug, Error)]
enum GeocodeError {
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("geocoding service returned {0}")]
    FailedRequest(StatusCode),
    #[error("undecodable response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Reverse geocoder backed by a photon-style `/reverse` endpoint returning a
/// ranked GeoJSON feature collection. Only the first candidate's name is
/// consumed.
#[derive(Debug, Clone)]
pub struct HttpGeocoder {
    http: Client,
    base_url: String,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    features: Vec<PlaceCandidate>,
}

#[derive(Debug, Deserialize)]
struct PlaceCandidate {
    properties: PlaceProperties,
}

#[derive(Debug, Deserialize)]
struct PlaceProperties {
    name: Option<String>,
}

impl HttpGeocoder {
    pub fn new(http: Client, base_url: &str, timeout: Duration) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    async fn lookup(&self, latitude: f64, longitude: f64) -> Result<Option<String>, GeocodeError> {
        let url = format!("{}/reverse", self.base_url);
        let url = Url::parse(&url).map_err(|e| GeocodeError::InvalidUrl(e.to_string()))?;

        let response = self
            .http
            .get(url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
            ])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::FailedRequest(status));
        }

        let body = response.text().await?;
        let decoded: ReverseResponse = serde_json::from_str(&body).map_err(GeocodeError::Decode)?;

        Ok(decoded
            .features
            .into_iter()
            .next()
            .and_then(|candidate| candidate.properties.name))
    }
}

#[async_trait]
impl ReverseGeocoder for HttpGeocoder {
    async fn place_name(&self, latitude: f64, longitude: f64) -> String {
        match self.lookup(latitude, longitude).await {
            Ok(Some(name)) => name,
            Ok(None) => {
                log::debug!("no geocode candidate for {latitude:.3},{longitude:.3}");
                UNKNOWN_PLACE.to_string()
            }
            Err(e) => {
                log::debug!("reverse geocoding failed for {latitude:.3},{longitude:.3}: {e}");
                UNKNOWN_PLACE.to_string()
            }
        }
    }
}
