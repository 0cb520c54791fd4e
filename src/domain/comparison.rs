use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Diesel/fossil generation covering the whole consumption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FossilFuelImpact {
    pub consumption: f64,
    pub cost: f64,
    pub co2_emission: f64,
    pub efficiency: f64,
}

/// On-site solar production.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarImpact {
    pub production: f64,
    pub cost: f64,
    pub co2_emission: f64,
    pub efficiency: f64,
}

/// Grid supply for whatever solar does not cover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridMixImpact {
    pub consumption: f64,
    pub cost: f64,
    pub co2_emission: f64,
    pub fossil_percentage: f64,
    pub renewable_percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyComparison {
    pub timestamp: DateTime<FixedOffset>,
    pub fossil_fuel: FossilFuelImpact,
    pub solar_energy: SolarImpact,
    pub grid_mix: GridMixImpact,
}

/// Everyday equivalents of an amount of saved CO₂.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionEquivalents {
    pub trees: f64,
    pub cars: f64,
    pub distance_km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionStats {
    #[serde(rename = "totalCO2")]
    pub total_co2: f64,
    #[serde(rename = "savedCO2")]
    pub saved_co2: f64,
    pub equivalent: EmissionEquivalents,
}

/// One point of the rolling comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    pub time: DateTime<FixedOffset>,
    pub fossil: f64,
    pub solar: f64,
    pub grid: f64,
}

impl From<&EnergyComparison> for ComparisonPoint {
    fn from(c: &EnergyComparison) -> Self {
        Self {
            time: c.timestamp,
            fossil: c.fossil_fuel.consumption,
            solar: c.solar_energy.production,
            grid: c.grid_mix.consumption,
        }
    }
}
