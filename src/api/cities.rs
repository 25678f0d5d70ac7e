//! City and state endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        city::{City, CityInput},
        ListQuery,
    },
};

/// List cities
#[utoipa::path(
    get,
    path = "/cities",
    tag = "cities",
    params(ListQuery),
    responses(
        (status = 200, description = "List of cities", body = Vec<City>)
    )
)]
pub async fn list_cities(
    State(state): State<crate::AppState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<City>>> {
    let cities = state.services.lookups.list_cities(&query).await?;
    Ok(Json(cities))
}

/// Get city by ID
#[utoipa::path(
    get,
    path = "/cities/{id}",
    tag = "cities",
    params(("id" = i32, Path, description = "City ID")),
    responses(
        (status = 200, description = "City details", body = City),
        (status = 404, description = "City not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_city(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<City>> {
    let city = state.services.lookups.get_city(id).await?;
    Ok(Json(city))
}

/// Create a city
#[utoipa::path(
    post,
    path = "/cities",
    tag = "cities",
    request_body = CityInput,
    responses(
        (status = 201, description = "City created", body = City),
        (status = 400, description = "Validation failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_city(
    State(state): State<crate::AppState>,
    Json(input): Json<CityInput>,
) -> AppResult<(StatusCode, Json<City>)> {
    let created = state.services.lookups.create_city(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a city
#[utoipa::path(
    put,
    path = "/cities/{id}",
    tag = "cities",
    params(("id" = i32, Path, description = "City ID")),
    request_body = CityInput,
    responses(
        (status = 200, description = "City updated", body = City),
        (status = 404, description = "City not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_city(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(input): Json<CityInput>,
) -> AppResult<Json<City>> {
    let updated = state.services.lookups.update_city(id, input).await?;
    Ok(Json(updated))
}

/// Delete a city
#[utoipa::path(
    delete,
    path = "/cities/{id}",
    tag = "cities",
    params(("id" = i32, Path, description = "City ID")),
    responses(
        (status = 204, description = "City deleted"),
        (status = 404, description = "City not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_city(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.lookups.delete_city(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List states (for the city form dropdown)
#[utoipa::path(
    get,
    path = "/states",
    tag = "cities",
    responses(
        (status = 200, description = "List of states", body = Vec<crate::models::city::State>)
    )
)]
pub async fn list_states(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<crate::models::city::State>>> {
    let states = state.services.lookups.list_states().await?;
    Ok(Json(states))
}
