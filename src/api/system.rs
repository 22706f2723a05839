use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::{AppState, HealthDto};

pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthDto>) {
    let uptime_seconds = state.start_time.elapsed().as_secs();

    match state.store().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthDto {
                status: "ok",
                uptime_seconds,
            }),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthDto {
                    status: "unavailable",
                    uptime_seconds,
                }),
            )
        }
    }
}
