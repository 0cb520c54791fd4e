//! # Emission & Cost Comparison
//!
//! Side-by-side cost and CO₂ of covering a load with diesel generation,
//! rooftop solar, or the national grid mix.

pub mod sampler;

pub use sampler::{ComparisonHistory, ComparisonSampler, ComparisonSnapshot, HISTORY_LEN};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::{
    EmissionEquivalents, EmissionStats, EnergyComparison, FossilFuelImpact, GridMixImpact, SolarImpact,
};

/// Per-source factors (Indonesian energy mix).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactors {
    /// kg CO₂/kWh, diesel generator
    pub fossil_emission: f64,
    /// kg CO₂/kWh, manufacturing and maintenance
    pub solar_emission: f64,
    /// kg CO₂/kWh, grid average
    pub grid_emission: f64,
    /// IDR/kWh
    pub fossil_cost: f64,
    pub solar_cost: f64,
    pub grid_cost: f64,
    /// %
    pub fossil_efficiency: f64,
    pub solar_efficiency: f64,
    pub grid_fossil_percentage: f64,
    pub grid_renewable_percentage: f64,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            fossil_emission: 0.82,
            solar_emission: 0.05,
            grid_emission: 0.65,
            fossil_cost: 2_500.0,
            solar_cost: 300.0,
            grid_cost: 1_500.0,
            fossil_efficiency: 35.0,
            solar_efficiency: 85.0,
            grid_fossil_percentage: 85.0,
            grid_renewable_percentage: 15.0,
        }
    }
}

/// kg CO₂ absorbed by one tree per year.
pub const KG_CO2_PER_TREE_YEAR: f64 = 21.77;
/// kg CO₂ emitted by one car per year.
pub const KG_CO2_PER_CAR_YEAR: f64 = 4_600.0;
/// kg CO₂ per km driven by an average car.
pub const KG_CO2_PER_CAR_KM: f64 = 0.12;

#[derive(Debug, Clone, Copy, Default)]
pub struct EmissionCalculator {
    factors: EmissionFactors,
}

impl EmissionCalculator {
    pub fn new(factors: EmissionFactors) -> Self {
        Self { factors }
    }

    pub fn factors(&self) -> &EmissionFactors {
        &self.factors
    }

    pub fn fossil_impact(&self, consumption: f64) -> FossilFuelImpact {
        FossilFuelImpact {
            consumption,
            cost: consumption * self.factors.fossil_cost,
            co2_emission: consumption * self.factors.fossil_emission,
            efficiency: self.factors.fossil_efficiency,
        }
    }

    pub fn solar_impact(&self, production: f64) -> SolarImpact {
        SolarImpact {
            production,
            cost: production * self.factors.solar_cost,
            co2_emission: production * self.factors.solar_emission,
            efficiency: self.factors.solar_efficiency,
        }
    }

    /// Grid supply after solar self-consumption; never negative.
    pub fn grid_impact(&self, consumption: f64, solar_production: f64) -> GridMixImpact {
        let grid_consumption = (consumption - solar_production).max(0.0);
        GridMixImpact {
            consumption: grid_consumption,
            cost: grid_consumption * self.factors.grid_cost,
            co2_emission: grid_consumption * self.factors.grid_emission,
            fossil_percentage: self.factors.grid_fossil_percentage,
            renewable_percentage: self.factors.grid_renewable_percentage,
        }
    }

    pub fn emission_stats(&self, total_co2: f64, saved_co2: f64) -> EmissionStats {
        EmissionStats {
            total_co2,
            saved_co2,
            equivalent: EmissionEquivalents {
                trees: (saved_co2 / KG_CO2_PER_TREE_YEAR).round(),
                cars: (saved_co2 / KG_CO2_PER_CAR_YEAR).round(),
                distance_km: (saved_co2 / KG_CO2_PER_CAR_KM).round(),
            },
        }
    }

    pub fn generate_comparison(
        &self,
        base_consumption: f64,
        solar_production: f64,
        timestamp: DateTime<FixedOffset>,
    ) -> EnergyComparison {
        EnergyComparison {
            timestamp,
            fossil_fuel: self.fossil_impact(base_consumption),
            solar_energy: self.solar_impact(solar_production),
            grid_mix: self.grid_impact(base_consumption, solar_production),
        }
    }
}
