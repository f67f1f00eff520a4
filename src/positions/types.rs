use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One sample of the tracked object at one instant, as returned by the
/// position service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RawPosition {
    pub name: String,
    /// Catalog id of the tracked object.
    pub id: u32,
    pub latitude: f64,
    pub longitude: f64,
    /// Kilometers above mean sea level.
    pub altitude: f64,
    /// Ground-track velocity in kilometers per hour.
    pub velocity: f64,
    pub visibility: Visibility,
    /// Radius of the visibility footprint in kilometers.
    pub footprint: f64,
    /// Unix timestamp, seconds.
    pub timestamp: f64,
    /// Fractional Julian day number.
    pub daynum: f64,
    pub solar_lat: f64,
    pub solar_lon: f64,
    pub units: Units,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Daylight,
    Eclipsed,
    /// The upstream service does not document its full vocabulary; unknown
    /// values must not fail decoding.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Miles,
    Kilometers,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Miles => "miles",
            Units::Kilometers => "kilometers",
        }
    }
}

impl RawPosition {
    pub fn coordinate(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    pub fn date(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis((self.timestamp * 1000.0).round() as i64)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "name": "iss",
        "id": 25544,
        "latitude": -6.2362424454339997,
        "longitude": 24.344490114338001,
        "altitude": 417.17841967651998,
        "velocity": 27584.875592541001,
        "visibility": "daylight",
        "footprint": 4493.0805789282003,
        "timestamp": 1668268800,
        "daynum": 2459896.1666667,
        "solar_lat": -17.807500227533001,
        "solar_lon": 296.04340016500998,
        "units": "kilometers"
    }"#;

    #[test]
    fn decodes_wire_format() {
        let position: RawPosition = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(position.id, 25544);
        assert_eq!(position.visibility, Visibility::Daylight);
        assert_eq!(position.units, Units::Kilometers);
        assert_eq!(position.solar_lon, 296.04340016500998);
        assert_eq!(position.date().timestamp(), 1668268800);
    }

    #[test]
    fn unknown_visibility_does_not_fail_decoding() {
        let json = SAMPLE.replace("daylight", "penumbra");
        let position: RawPosition = serde_json::from_str(&json).unwrap();
        assert_eq!(position.visibility, Visibility::Other);
    }
}
