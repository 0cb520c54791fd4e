use serde::{Deserialize, Serialize};

/// Annual consumption split per end use, kWh/year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyBreakdown {
    pub hvac: f64,
    pub lighting: f64,
    pub plug_loads: f64,
    pub server_room: f64,
    pub others: f64,
}

impl EnergyBreakdown {
    pub fn total(&self) -> f64 {
        self.hvac + self.lighting + self.plug_loads + self.server_room + self.others
    }
}

/// Reference figures for the monitored building.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baseline {
    /// kWh/year
    pub total_consumption: f64,
    /// m²
    pub building_area: f64,
    /// kWh/m²/year
    pub current_performance: f64,
    /// ton CO₂/year
    pub co2_emission: f64,
    pub energy_breakdown: EnergyBreakdown,
}

impl Default for Baseline {
    fn default() -> Self {
        Self {
            total_consumption: 920_000.0,
            building_area: 7_931.0,
            current_performance: 116.0,
            co2_emission: 600.0,
            energy_breakdown: EnergyBreakdown {
                hvac: 460_000.0,
                lighting: 230_000.0,
                plug_loads: 140_000.0,
                server_room: 45_000.0,
                others: 45_000.0,
            },
        }
    }
}

/// Consumption category with its reduction target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionCategory {
    pub category: String,
    pub current: f64,
    pub target: f64,
}

impl Baseline {
    /// Breakdown rows paired with the per-category targets.
    pub fn breakdown_with_targets(&self) -> Vec<ConsumptionCategory> {
        let b = &self.energy_breakdown;
        [
            ("AC (HVAC)", b.hvac, 320_000.0),
            ("Lighting", b.lighting, 180_000.0),
            ("Plug Loads", b.plug_loads, 120_000.0),
            ("Server Room", b.server_room, 40_000.0),
            ("Others", b.others, 40_000.0),
        ]
        .into_iter()
        .map(|(category, current, target)| ConsumptionCategory {
            category: category.to_string(),
            current,
            target,
        })
        .collect()
    }
}

/// User-adjustable what-if inputs for the savings calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInputs {
    pub current_consumption_kwh: f64,
    pub building_area_m2: f64,
    pub solar_capacity_kwp: f64,
    pub investment_cost_idr: f64,
    pub lighting_efficiency_percent: f64,
    pub ac_efficiency_percent: f64,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            current_consumption_kwh: 920_000.0,
            building_area_m2: 7_931.0,
            solar_capacity_kwp: 186.62,
            investment_cost_idr: 2_500_000_000.0,
            lighting_efficiency_percent: 15.0,
            ac_efficiency_percent: 10.0,
        }
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

impl SimulationInputs {
    /// Clamp every field to a finite, non-negative number.
    pub fn sanitized(self) -> Self {
        Self {
            current_consumption_kwh: non_negative(self.current_consumption_kwh),
            building_area_m2: non_negative(self.building_area_m2),
            solar_capacity_kwp: non_negative(self.solar_capacity_kwp),
            investment_cost_idr: non_negative(self.investment_cost_idr),
            lighting_efficiency_percent: non_negative(self.lighting_efficiency_percent),
            ac_efficiency_percent: non_negative(self.ac_efficiency_percent),
        }
    }
}

/// Outcome of a savings simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsResult {
    pub total_savings_kwh: f64,
    pub new_consumption_kwh: f64,
    pub new_performance_kwh_per_m2: f64,
    pub co2_reduction_ton: f64,
    pub roi_percent: f64,
    pub payback_years: f64,
}

/// Energy-performance band of a building, kWh/m²/year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceRating {
    Efficient,
    Moderate,
    Inefficient,
}

impl PerformanceRating {
    pub fn from_kwh_per_m2(performance: f64) -> Self {
        if performance <= 85.0 {
            PerformanceRating::Efficient
        } else if performance <= 100.0 {
            PerformanceRating::Moderate
        } else {
            PerformanceRating::Inefficient
        }
    }
}

/// Snapshot shown on the live dashboard. Daily figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub current_consumption_kwh: f64,
    pub solar_production_kwh: f64,
    pub energy_performance: f64,
    pub co2_emission_ton: f64,
    pub cost_savings_idr: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_breakdown_sums_to_total() {
        let baseline = Baseline::default();
        assert_eq!(baseline.energy_breakdown.total(), baseline.total_consumption);
        assert_eq!(baseline.breakdown_with_targets().len(), 5);
    }

    #[test]
    fn test_sanitized_clamps_negative_and_nan() {
        let inputs = SimulationInputs {
            solar_capacity_kwp: -4.0,
            investment_cost_idr: f64::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(inputs.solar_capacity_kwp, 0.0);
        assert_eq!(inputs.investment_cost_idr, 0.0);
        assert_eq!(inputs.building_area_m2, 7_931.0);
    }

    #[test]
    fn test_performance_rating_bands() {
        assert_eq!(PerformanceRating::from_kwh_per_m2(71.6), PerformanceRating::Efficient);
        assert_eq!(PerformanceRating::from_kwh_per_m2(85.0), PerformanceRating::Efficient);
        assert_eq!(PerformanceRating::from_kwh_per_m2(99.9), PerformanceRating::Moderate);
        assert_eq!(PerformanceRating::from_kwh_per_m2(116.0), PerformanceRating::Inefficient);
    }
}
