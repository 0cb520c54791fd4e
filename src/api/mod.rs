pub mod comparison;
pub mod error;
pub mod health;
pub mod savings;
pub mod weather;

use axum::{
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::app::AppState;

pub fn router(state: AppState) -> Router {
    let request_timeout = Duration::from_secs(state.cfg.server.request_timeout_secs);
    let enable_cors = state.cfg.server.enable_cors;

    let api = Router::new()
        .route("/weather", get(weather::get_weather))
        .route("/sunlight", get(weather::get_sunlight))
        .route("/solar/prediction", get(weather::get_solar_prediction))
        .route("/solar/potential", get(weather::get_solar_potential))
        .route("/solar/monthly", get(weather::get_monthly_solar))
        .route("/savings", post(savings::calculate_savings))
        .route("/baseline", get(savings::get_baseline))
        .route("/comparison", get(comparison::get_comparison))
        .route("/comparison/history", get(comparison::get_comparison_history))
        .route("/dashboard", get(comparison::get_dashboard))
        .route("/time", get(comparison::get_time))
        .route("/healthz", get(health::health_check))
        .route("/healthz/live", get(health::liveness_check))
        .with_state(state);

    let mut router = Router::new().nest("/api", api);

    if enable_cors {
        use tower_http::cors::{AllowOrigin, Any};
        let cors = CorsLayer::new()
            .allow_origin(AllowOrigin::any())
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers(Any);
        router = router.layer(cors);
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(64 * 1024))
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .layer(TraceLayer::new_for_http())
}
