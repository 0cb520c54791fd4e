use axum::{extract::State, Json};
use serde::Serialize;

use crate::{
    app::AppState,
    domain::{ComparisonPoint, DashboardMetrics},
    emissions::ComparisonSnapshot,
    time_of_day::TimeOfDay,
};

/// GET /api/comparison
///
/// One refresh tick of the energy-source comparison. The point is appended
/// to the rolling chart history.
pub async fn get_comparison(State(state): State<AppState>) -> Json<ComparisonSnapshot> {
    let snapshot = state.sampler.sample();
    state
        .history
        .lock()
        .push(ComparisonPoint::from(&snapshot.comparison));
    Json(snapshot)
}

/// GET /api/comparison/history - oldest first
pub async fn get_comparison_history(State(state): State<AppState>) -> Json<Vec<ComparisonPoint>> {
    let points = state.history.lock().iter().copied().collect();
    Json(points)
}

/// GET /api/dashboard
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardMetrics> {
    Json(state.dashboard.metrics())
}

#[derive(Debug, Serialize)]
pub struct TimeResponse {
    #[serde(flatten)]
    pub time_of_day: TimeOfDay,
    pub now: chrono::DateTime<chrono::FixedOffset>,
}

/// GET /api/time
pub async fn get_time(State(state): State<AppState>) -> Json<TimeResponse> {
    Json(TimeResponse {
        time_of_day: TimeOfDay::now(state.clock.as_ref()),
        now: state.clock.now(),
    })
}
