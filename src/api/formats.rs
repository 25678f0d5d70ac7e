//! Format endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        format::{Format, FormatInput},
        ListQuery,
    },
};

/// List formats
#[utoipa::path(
    get,
    path = "/formats",
    tag = "formats",
    params(ListQuery),
    responses(
        (status = 200, description = "List of formats", body = Vec<Format>)
    )
)]
pub async fn list_formats(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Format>>> {
    let formats = state.services.lookups.list_formats(&query).await?;
    Ok(Json(formats))
}

/// Get format by ID
#[utoipa::path(
    get,
    path = "/formats/{id}",
    tag = "formats",
    params(("id" = i32, Path, description = "Format ID")),
    responses(
        (status = 200, description = "Format details", body = Format),
        (status = 404, description = "Format not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_format(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Format>> {
    let format = state.services.lookups.get_format(id).await?;
    Ok(Json(format))
}

/// Create a format
#[utoipa::path(
    post,
    path = "/formats",
    tag = "formats",
    request_body = FormatInput,
    responses(
        (status = 201, description = "Format created", body = Format),
        (status = 400, description = "Validation failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_format(
    State(state): State<crate::AppState>,
    Json(input): Json<FormatInput>,
) -> AppResult<(StatusCode, Json<Format>)> {
    let created = state.services.lookups.create_format(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a format
#[utoipa::path(
    put,
    path = "/formats/{id}",
    tag = "formats",
    params(("id" = i32, Path, description = "Format ID")),
    request_body = FormatInput,
    responses(
        (status = 200, description = "Format updated", body = Format),
        (status = 404, description = "Format not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_format(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(input): Json<FormatInput>,
) -> AppResult<Json<Format>> {
    let updated = state.services.lookups.update_format(id, input).await?;
    Ok(Json(updated))
}

/// Delete a format
#[utoipa::path(
    delete,
    path = "/formats/{id}",
    tag = "formats",
    params(("id" = i32, Path, description = "Format ID")),
    responses(
        (status = 204, description = "Format deleted"),
        (status = 400, description = "Format still referenced", body = crate::error::ErrorResponse),
        (status = 404, description = "Format not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_format(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.lookups.delete_format(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
