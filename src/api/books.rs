//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, BookInput, BookQuery},
};

/// List books with filter, pagination and sorting
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list(&query).await?;
    Ok(Json(books))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get(id).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookInput,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Validation failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(input): Json<BookInput>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.books.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = BookInput,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Validation failed", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(input): Json<BookInput>,
) -> AppResult<Json<Book>> {
    let updated = state.services.books.update(id, input).await?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.books.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
