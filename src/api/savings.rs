use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    api::error::ApiError,
    app::AppState,
    domain::{Baseline, ConsumptionCategory, PerformanceRating, SavingsResult, SimulationInputs},
};

/// Savings simulation request. Omitted fields take the plan's sample values.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SavingsRequest {
    pub current_consumption_kwh: Option<f64>,
    pub building_area_m2: Option<f64>,
    pub solar_capacity_kwp: Option<f64>,
    pub investment_cost_idr: Option<f64>,
    #[validate(range(min = 0.0, max = 50.0))]
    pub lighting_efficiency_percent: Option<f64>,
    #[validate(range(min = 0.0, max = 30.0))]
    pub ac_efficiency_percent: Option<f64>,
}

impl SavingsRequest {
    pub fn into_inputs(self) -> SimulationInputs {
        let d = SimulationInputs::default();
        SimulationInputs {
            current_consumption_kwh: self.current_consumption_kwh.unwrap_or(d.current_consumption_kwh),
            building_area_m2: self.building_area_m2.unwrap_or(d.building_area_m2),
            solar_capacity_kwp: self.solar_capacity_kwp.unwrap_or(d.solar_capacity_kwp),
            investment_cost_idr: self.investment_cost_idr.unwrap_or(d.investment_cost_idr),
            lighting_efficiency_percent: self
                .lighting_efficiency_percent
                .unwrap_or(d.lighting_efficiency_percent),
            ac_efficiency_percent: self.ac_efficiency_percent.unwrap_or(d.ac_efficiency_percent),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsResponse {
    pub inputs: SimulationInputs,
    pub result: SavingsResult,
    pub rating: PerformanceRating,
}

/// POST /api/savings
pub async fn calculate_savings(
    State(state): State<AppState>,
    Json(req): Json<SavingsRequest>,
) -> Result<Json<SavingsResponse>, ApiError> {
    req.validate()?;
    let inputs = req.into_inputs().sanitized();
    let result = state.savings.calculate_savings(inputs)?;
    tracing::debug!(
        total_savings_kwh = result.total_savings_kwh,
        roi_percent = result.roi_percent,
        "savings simulated"
    );
    Ok(Json(SavingsResponse {
        inputs,
        result,
        rating: PerformanceRating::from_kwh_per_m2(result.new_performance_kwh_per_m2),
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineResponse {
    pub baseline: Baseline,
    pub rating: PerformanceRating,
    pub categories: Vec<ConsumptionCategory>,
}

/// GET /api/baseline
pub async fn get_baseline(State(state): State<AppState>) -> Json<BaselineResponse> {
    let baseline = *state.savings.baseline();
    Json(BaselineResponse {
        rating: PerformanceRating::from_kwh_per_m2(baseline.current_performance),
        categories: baseline.breakdown_with_targets(),
        baseline,
    })
}
