use axum::{extract::State, http::StatusCode};

use crate::AppState;

/// # GET /health
/// 200 when the database answers a trivial query, 503 otherwise.
pub async fn check(State(state): State<AppState>) -> (StatusCode, &'static str) {
    if state.db.health_check().await {
        (StatusCode::OK, "OK")
    } else {
        tracing::warn!("Health check failed: database unreachable");
        (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
    }
}
