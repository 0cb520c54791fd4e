//! Weather observation types shared by the provider and the analyzers.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// Main weather condition group, as reported by the weather service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Thunderstorm,
    Drizzle,
    Snow,
    Mist,
    Fog,
    Haze,
    Other,
}

impl WeatherCondition {
    /// Parse a provider condition string; anything unrecognised maps to `Other`.
    pub fn from_provider(s: &str) -> Self {
        s.trim().parse().unwrap_or(WeatherCondition::Other)
    }

    /// Conditions the simulated provider draws from.
    pub const SIMULATED: [WeatherCondition; 4] = [
        WeatherCondition::Clear,
        WeatherCondition::Clouds,
        WeatherCondition::Rain,
        WeatherCondition::Thunderstorm,
    ];
}

/// Current conditions for one location at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherObservation {
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
    pub solar_irradiance_wm2: f64,
    pub condition: WeatherCondition,
    pub location_name: String,
    pub observed_at: DateTime<FixedOffset>,
}

/// The cities the dashboard knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Jakarta,
    Surabaya,
    Bandung,
    Medan,
}

/// A requested location key, resolved against the known cities.
///
/// Unknown keys are kept distinct from `Jakarta` because the simulated
/// provider gives them their own base temperature, while everything else
/// (coordinates, display name) falls back to Jakarta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKey {
    Known(Location),
    Unknown,
}

impl LocationKey {
    /// Keys are matched exactly; `"MEDAN"` or `" medan"` are unknown.
    pub fn parse(key: &str) -> Self {
        match key {
            "jakarta" => LocationKey::Known(Location::Jakarta),
            "surabaya" => LocationKey::Known(Location::Surabaya),
            "bandung" => LocationKey::Known(Location::Bandung),
            "medan" => LocationKey::Known(Location::Medan),
            _ => LocationKey::Unknown,
        }
    }

    /// The city whose coordinates and display name serve this key.
    pub fn resolve(self) -> Location {
        match self {
            LocationKey::Known(loc) => loc,
            LocationKey::Unknown => Location::Jakarta,
        }
    }
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::Jakarta,
        Location::Surabaya,
        Location::Bandung,
        Location::Medan,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Location::Jakarta => "Jakarta",
            Location::Surabaya => "Surabaya",
            Location::Bandung => "Bandung",
            Location::Medan => "Medan",
        }
    }

    /// Latitude/longitude in decimal degrees.
    pub fn coordinates(self) -> GeoPoint {
        match self {
            Location::Jakarta => GeoPoint::new(-6.2088, 106.8456),
            Location::Surabaya => GeoPoint::new(-7.2575, 112.7521),
            Location::Bandung => GeoPoint::new(-6.9175, 107.6191),
            Location::Medan => GeoPoint::new(3.5952, 98.6722),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Geographic point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_from_provider() {
        assert_eq!(WeatherCondition::from_provider("Clear"), WeatherCondition::Clear);
        assert_eq!(WeatherCondition::from_provider("Haze"), WeatherCondition::Haze);
        assert_eq!(WeatherCondition::from_provider("Tornado"), WeatherCondition::Other);
        assert_eq!(WeatherCondition::from_provider(""), WeatherCondition::Other);
    }

    #[test]
    fn test_location_key_resolution() {
        assert_eq!(LocationKey::parse("bandung").resolve(), Location::Bandung);
        assert_eq!(LocationKey::parse("medan").resolve(), Location::Medan);
        assert_eq!(LocationKey::parse("MEDAN"), LocationKey::Unknown);
        assert_eq!(LocationKey::parse(" medan "), LocationKey::Unknown);
        assert_eq!(LocationKey::parse("MEDAN").resolve(), Location::Jakarta);
        assert_eq!(LocationKey::parse("tokyo"), LocationKey::Unknown);
        assert_eq!(LocationKey::parse("tokyo").resolve(), Location::Jakarta);
    }

    #[test]
    fn test_observation_serializes_camel_case() {
        let obs = WeatherObservation {
            temperature_celsius: 31.0,
            humidity_percent: 70.0,
            solar_irradiance_wm2: 800.0,
            condition: WeatherCondition::Clear,
            location_name: "Jakarta".to_string(),
            observed_at: chrono::Utc::now().fixed_offset(),
        };
        let json = serde_json::to_value(&obs).unwrap();
        assert_eq!(json["temperatureCelsius"], 31.0);
        assert_eq!(json["solarIrradianceWm2"], 800.0);
        assert_eq!(json["condition"], "Clear");
        assert_eq!(json["locationName"], "Jakarta");
    }
}
