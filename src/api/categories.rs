//! Category endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        category::{Category, CategoryInput},
        ListQuery,
    },
};

/// List categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    params(ListQuery),
    responses(
        (status = 200, description = "List of categories", body = Vec<Category>)
    )
)]
pub async fn list_categories(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Category>>> {
    let categories = state.services.lookups.list_categories(&query).await?;
    Ok(Json(categories))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category details", body = Category),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Category>> {
    let category = state.services.lookups.get_category(id).await?;
    Ok(Json(category))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CategoryInput,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Validation failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_category(
    State(state): State<crate::AppState>,
    Json(input): Json<CategoryInput>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let created = state.services.lookups.create_category(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryInput,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(input): Json<CategoryInput>,
) -> AppResult<Json<Category>> {
    let updated = state.services.lookups.update_category(id, input).await?;
    Ok(Json(updated))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 400, description = "Category still referenced", body = crate::error::ErrorResponse),
        (status = 404, description = "Category not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_category(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.lookups.delete_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
