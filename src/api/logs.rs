//! Audit log endpoints (read-only)

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::{log::LogEntry, ListQuery},
};

/// List audit entries, newest first
#[utoipa::path(
    get,
    path = "/logs",
    tag = "logs",
    params(ListQuery),
    responses(
        (status = 200, description = "List of audit entries", body = Vec<LogEntry>)
    )
)]
pub async fn list_logs(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<LogEntry>>> {
    let logs = state.services.audit.list(&query).await?;
    Ok(Json(logs))
}
