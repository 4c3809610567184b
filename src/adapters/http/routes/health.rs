use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use crate::adapters::http::app_state::AppState;

const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

/// GET /api/health
/// Reports environment, public URL and the state of the configured backend.
async fn health(State(app_state): State<AppState>) -> impl IntoResponse {
    let report = app_state.health_use_cases.check().await;
    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, [(header::CACHE_CONTROL, NO_CACHE)], Json(report))
}
