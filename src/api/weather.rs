//! Weather and solar endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::{
    app::AppState,
    domain::{
        MonthlySolarProduction, SolarPotential, SolarProductionForecast, SunlightAssessment,
        WeatherObservation,
    },
    savings::estimate_ac_consumption,
    solar::solar_potential,
};

/// Raw query pairs; repeated or unexpected parameters never reject a request.
pub type QueryPairs = Vec<(String, String)>;

fn first_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// First `location` value, or the configured default when absent or empty.
fn location_key<'a>(params: &'a [(String, String)], state: &'a AppState) -> &'a str {
    first_param(params, "location")
        .filter(|l| !l.is_empty())
        .unwrap_or(state.cfg.weather.default_location.as_str())
}

/// GET /api/weather?location=<key>
///
/// Always answers 200; failures of the live service are masked with
/// simulated data.
pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Json<WeatherObservation> {
    let location = location_key(&params, &state);
    info!(%location, "fetching weather data");
    Json(state.weather.get_weather(location).await)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SunlightResponse {
    pub weather: WeatherObservation,
    pub sunlight: SunlightAssessment,
}

/// GET /api/sunlight?location=<key>
pub async fn get_sunlight(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Json<SunlightResponse> {
    let weather = state.weather.get_weather(location_key(&params, &state)).await;
    let sunlight = state.sunlight.analyze_sunlight(&weather);
    Json(SunlightResponse { weather, sunlight })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub weather: WeatherObservation,
    pub panel_capacity_kwp: f64,
    pub forecast: SolarProductionForecast,
}

/// GET /api/solar/prediction?location=<key>&capacity_kwp=<kWp>
pub async fn get_solar_prediction(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Json<PredictionResponse> {
    let weather = state.weather.get_weather(location_key(&params, &state)).await;
    let capacity = first_param(&params, "capacity_kwp")
        .and_then(|c| c.parse::<f64>().ok())
        .filter(|c| c.is_finite() && *c >= 0.0)
        .unwrap_or(state.cfg.solar.panel_capacity_kwp);
    let forecast = state.production.predict_solar_production(&weather, capacity);
    Json(PredictionResponse {
        weather,
        panel_capacity_kwp: capacity,
        forecast,
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PotentialResponse {
    pub weather: WeatherObservation,
    pub panel_area_m2: f64,
    pub potential: SolarPotential,
    /// Cooling load at the observed temperature over the baseline floor area.
    pub ac_load_kwh_per_day: f64,
}

/// GET /api/solar/potential?location=<key>
pub async fn get_solar_potential(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Json<PotentialResponse> {
    let weather = state.weather.get_weather(location_key(&params, &state)).await;
    let panel_area_m2 = state.cfg.solar.panel_area_m2;
    let potential = solar_potential(&weather, panel_area_m2);
    let ac_load_kwh_per_day = estimate_ac_consumption(
        weather.temperature_celsius,
        state.savings.baseline().building_area,
    );
    Json(PotentialResponse {
        weather,
        panel_area_m2,
        potential,
        ac_load_kwh_per_day,
    })
}

/// GET /api/solar/monthly
pub async fn get_monthly_solar(State(state): State<AppState>) -> Json<Vec<MonthlySolarProduction>> {
    Json(state.dashboard.monthly_solar(15_000.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_first_param_wins() {
        let params = pairs(&[("location", "medan"), ("location", "bandung")]);
        assert_eq!(first_param(&params, "location"), Some("medan"));
        assert_eq!(first_param(&params, "capacity_kwp"), None);
    }
}
