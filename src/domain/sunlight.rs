use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Strength of available sunlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SunlightIntensity {
    High,
    Medium,
    Low,
    None,
}

/// Hours of the day considered best for solar production.
pub const OPTIMAL_HOURS: [u32; 7] = [9, 10, 11, 12, 13, 14, 15];

/// Result of analysing the current weather for solar use.
///
/// Construct through [`SunlightAssessment::new`] or [`SunlightAssessment::dark`];
/// both keep `has_sunlight == false` implying no intensity and zero sun hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SunlightAssessment {
    pub has_sunlight: bool,
    pub intensity: SunlightIntensity,
    pub estimated_sun_hours: f64,
    pub optimal_hours: BTreeSet<u32>,
    pub recommended_actions: Vec<String>,
}

impl SunlightAssessment {
    pub fn new(
        has_sunlight: bool,
        intensity: SunlightIntensity,
        estimated_sun_hours: f64,
        recommended_actions: &[&str],
    ) -> Self {
        if !has_sunlight {
            return Self::dark(recommended_actions);
        }
        Self {
            has_sunlight,
            intensity,
            estimated_sun_hours: estimated_sun_hours.clamp(0.0, 8.0),
            optimal_hours: OPTIMAL_HOURS.into_iter().collect(),
            recommended_actions: recommended_actions.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// No usable sunlight.
    pub fn dark(recommended_actions: &[&str]) -> Self {
        Self {
            has_sunlight: false,
            intensity: SunlightIntensity::None,
            estimated_sun_hours: 0.0,
            optimal_hours: OPTIMAL_HOURS.into_iter().collect(),
            recommended_actions: recommended_actions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Same-day solar production estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarProductionForecast {
    pub predicted_production_kwh: f64,
    pub efficiency_percent: f64,
    pub confidence_percent: f64,
}

/// Solar potential of a panel field under the current irradiance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarPotential {
    pub daily: f64,
    pub monthly: f64,
    pub yearly: f64,
}

/// One month of the simulated annual production profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySolarProduction {
    pub month: String,
    pub production: f64,
    pub potential: f64,
}
