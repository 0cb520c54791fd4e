use serde::{Deserialize, Serialize};

use crate::domain::WeatherCondition;

/// Typical irradiance (W/m²) per weather condition.
///
/// Neither weather source measures irradiance, so both estimate it from the
/// condition with this table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrradianceTable {
    pub clear: f64,
    pub clouds: f64,
    pub rain: f64,
    pub thunderstorm: f64,
    pub drizzle: f64,
    pub snow: f64,
    pub mist: f64,
    pub fog: f64,
    pub haze: f64,
    /// Used for any condition without its own entry.
    pub default: f64,
}

impl Default for IrradianceTable {
    fn default() -> Self {
        Self {
            clear: 800.0,
            clouds: 400.0,
            rain: 150.0,
            thunderstorm: 100.0,
            drizzle: 300.0,
            snow: 200.0,
            mist: 250.0,
            fog: 200.0,
            haze: 300.0,
            default: 500.0,
        }
    }
}

impl IrradianceTable {
    pub fn estimate(&self, condition: WeatherCondition) -> f64 {
        match condition {
            WeatherCondition::Clear => self.clear,
            WeatherCondition::Clouds => self.clouds,
            WeatherCondition::Rain => self.rain,
            WeatherCondition::Thunderstorm => self.thunderstorm,
            WeatherCondition::Drizzle => self.drizzle,
            WeatherCondition::Snow => self.snow,
            WeatherCondition::Mist => self.mist,
            WeatherCondition::Fog => self.fog,
            WeatherCondition::Haze => self.haze,
            WeatherCondition::Other => self.default,
        }
    }
}
