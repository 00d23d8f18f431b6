//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let storage = state.storage.health_check().await.unwrap_or(false);
    let active_users = state.tracker.active_count().await.unwrap_or(0);

    Json(ApiResponse::ok(HealthResponse {
        status: if storage { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage,
        sessions: state.sessions.len(),
        active_users,
    }))
}
