//! Liveness and readiness endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    /// "healthy", "ready" or "unavailable"
    pub status: String,
    pub version: String,
}

impl HealthStatus {
    fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Liveness probe, answers as long as the process is up
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = HealthStatus)
    )
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::new("healthy"))
}

/// Readiness probe, fails when the database cannot be reached
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service can reach the database", body = HealthStatus),
        (status = 503, description = "Database is unreachable", body = HealthStatus)
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    match state.services.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthStatus::new("ready"))),
        Err(e) => {
            tracing::error!("readiness check failed: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus::new("unavailable")),
            )
        }
    }
}
