use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::positions::RawPosition;

pub const KILOMETERS_PER_MILE: f64 = 1.609344;

pub fn kilometers_to_miles(kilometers: f64) -> f64 {
    kilometers / KILOMETERS_PER_MILE
}

pub fn miles_to_kilometers(miles: f64) -> f64 {
    miles * KILOMETERS_PER_MILE
}

/// A raw position tagged with its resolved place name. Immutable once
/// constructed; consumers derive presentation values through the accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnrichedPosition {
    pub position: RawPosition,
    pub place_name: String,
}

impl EnrichedPosition {
    pub fn new(position: RawPosition, place_name: String) -> Self {
        Self {
            position,
            place_name,
        }
    }

    pub fn altitude_miles(&self) -> f64 {
        kilometers_to_miles(self.position.altitude)
    }

    pub fn velocity_miles_per_hour(&self) -> f64 {
        kilometers_to_miles(self.position.velocity)
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.position.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_conversion_round_trips() {
        let altitude_km = 417.178;
        let round_tripped = miles_to_kilometers(kilometers_to_miles(altitude_km));
        assert!((round_tripped - altitude_km).abs() < 1e-6);
    }

    #[test]
    fn derived_accessors_read_the_raw_record() {
        let position: RawPosition = serde_json::from_str(
            r#"{
                "name": "iss", "id": 25544,
                "latitude": -6.236, "longitude": 24.344,
                "altitude": 417.178, "velocity": 27584.875,
                "visibility": "daylight", "footprint": 4493.08,
                "timestamp": 1668268800, "daynum": 2459896.1666667,
                "solar_lat": -17.807, "solar_lon": 296.043,
                "units": "kilometers"
            }"#,
        )
        .unwrap();

        let enriched = EnrichedPosition::new(position, "Kabinda".to_string());
        assert_eq!(enriched.date().timestamp(), 1668268800);
        assert!((enriched.altitude_miles() - 259.222).abs() < 1e-3);
        assert_eq!(enriched.place_name, "Kabinda");
    }
}
