//! # Energy Savings
//!
//! What-if calculator for the retrofit plan: fixed sensor and roof-vent
//! savings, rooftop solar, and optional lighting/AC efficiency programmes,
//! measured against the building's baseline.

pub mod dashboard;

pub use dashboard::{DashboardSimulator, PLANNED_ANNUAL_SAVINGS_KWH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Baseline, SavingsResult, SimulationInputs};

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SavingsError {
    #[error("building area must be positive, got {0} m²")]
    InvalidBuildingArea(f64),
}

/// Fixed assumptions of the retrofit business plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsAssumptions {
    /// Occupancy sensors, kWh/year
    pub lighting_sensor_savings: f64,
    /// Roof ventilation, kWh/year
    pub ac_vent_savings: f64,
    /// Annual yield per installed kWp
    pub solar_full_load_hours: f64,
    /// ton CO₂ per kWh
    pub co2_ton_per_kwh: f64,
    /// IDR per kWh saved
    pub electricity_price_idr: f64,
}

impl Default for SavingsAssumptions {
    fn default() -> Self {
        Self {
            lighting_sensor_savings: 12_880.0,
            ac_vent_savings: 46_000.0,
            solar_full_load_hours: 1_350.0,
            co2_ton_per_kwh: 0.000652,
            electricity_price_idr: 1_500.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EnergyCalculator {
    baseline: Baseline,
    assumptions: SavingsAssumptions,
}

impl EnergyCalculator {
    pub fn new(baseline: Baseline, assumptions: SavingsAssumptions) -> Self {
        Self {
            baseline,
            assumptions,
        }
    }

    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    /// Annual savings for `inputs`. Inputs are clamped to non-negative values
    /// first; a zero building area is rejected rather than producing an
    /// infinite performance index.
    pub fn calculate_savings(&self, inputs: SimulationInputs) -> Result<SavingsResult, SavingsError> {
        let inputs = inputs.sanitized();
        if inputs.building_area_m2 <= 0.0 {
            return Err(SavingsError::InvalidBuildingArea(inputs.building_area_m2));
        }

        let a = &self.assumptions;
        let breakdown = &self.baseline.energy_breakdown;

        let solar_production = inputs.solar_capacity_kwp * a.solar_full_load_hours;
        let additional_lighting = breakdown.lighting * inputs.lighting_efficiency_percent / 100.0;
        let additional_ac = breakdown.hvac * inputs.ac_efficiency_percent / 100.0;

        let total_savings = a.lighting_sensor_savings
            + a.ac_vent_savings
            + solar_production
            + additional_lighting
            + additional_ac;

        // May go negative for extreme inputs; reported as is.
        let new_consumption = self.baseline.total_consumption - total_savings;
        let annual_savings_cost = total_savings * a.electricity_price_idr;

        let (roi_percent, payback_years) = if inputs.investment_cost_idr > 0.0 {
            (
                annual_savings_cost / inputs.investment_cost_idr * 100.0,
                inputs.investment_cost_idr / annual_savings_cost,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(SavingsResult {
            total_savings_kwh: total_savings,
            new_consumption_kwh: new_consumption,
            new_performance_kwh_per_m2: new_consumption / inputs.building_area_m2,
            co2_reduction_ton: total_savings * a.co2_ton_per_kwh,
            roi_percent,
            payback_years,
        })
    }
}

/// Cooling load estimate, kWh/day: 50 W/m² base load, +10 % per °C above 25 °C.
pub fn estimate_ac_consumption(temperature_celsius: f64, building_area_m2: f64) -> f64 {
    const BASE_LOAD_W_PER_M2: f64 = 50.0;
    let temp_factor = ((temperature_celsius - 25.0) * 0.1).max(1.0);
    BASE_LOAD_W_PER_M2 * temp_factor * building_area_m2 * 24.0 / 1000.0
}
