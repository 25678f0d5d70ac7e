//! Publisher endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        publisher::{Publisher, PublisherInput},
        ListQuery,
    },
};

/// List publishers
#[utoipa::path(
    get,
    path = "/publishers",
    tag = "publishers",
    params(ListQuery),
    responses(
        (status = 200, description = "List of publishers", body = Vec<Publisher>)
    )
)]
pub async fn list_publishers(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Publisher>>> {
    let publishers = state.services.lookups.list_publishers(&query).await?;
    Ok(Json(publishers))
}

/// Get publisher by ID
#[utoipa::path(
    get,
    path = "/publishers/{id}",
    tag = "publishers",
    params(("id" = i32, Path, description = "Publisher ID")),
    responses(
        (status = 200, description = "Publisher details", body = Publisher),
        (status = 404, description = "Publisher not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_publisher(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Publisher>> {
    let publisher = state.services.lookups.get_publisher(id).await?;
    Ok(Json(publisher))
}

/// Create a publisher
#[utoipa::path(
    post,
    path = "/publishers",
    tag = "publishers",
    request_body = PublisherInput,
    responses(
        (status = 201, description = "Publisher created", body = Publisher),
        (status = 400, description = "Validation failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_publisher(
    State(state): State<crate::AppState>,
    Json(input): Json<PublisherInput>,
) -> AppResult<(StatusCode, Json<Publisher>)> {
    let created = state.services.lookups.create_publisher(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a publisher
#[utoipa::path(
    put,
    path = "/publishers/{id}",
    tag = "publishers",
    params(("id" = i32, Path, description = "Publisher ID")),
    request_body = PublisherInput,
    responses(
        (status = 200, description = "Publisher updated", body = Publisher),
        (status = 404, description = "Publisher not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_publisher(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(input): Json<PublisherInput>,
) -> AppResult<Json<Publisher>> {
    let updated = state.services.lookups.update_publisher(id, input).await?;
    Ok(Json(updated))
}

/// Delete a publisher
#[utoipa::path(
    delete,
    path = "/publishers/{id}",
    tag = "publishers",
    params(("id" = i32, Path, description = "Publisher ID")),
    responses(
        (status = 204, description = "Publisher deleted"),
        (status = 400, description = "Publisher still referenced", body = crate::error::ErrorResponse),
        (status = 404, description = "Publisher not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_publisher(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.lookups.delete_publisher(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
