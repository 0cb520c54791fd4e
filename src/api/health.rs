use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::app::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: chrono::DateTime<chrono::Utc>,
    weather_source: &'static str,
}

/// GET /api/healthz
///
/// The service has no hard dependencies: a missing or failing weather API
/// only switches it to simulated data, which is reported but still healthy.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        weather_source: if state.weather.is_live() {
            "openweathermap"
        } else {
            "simulated"
        },
    };
    (StatusCode::OK, Json(response))
}

/// GET /api/healthz/live - Liveness probe
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}
