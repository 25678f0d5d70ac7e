//! Book management pages

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use maud::{html, Markup};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookInput, BookQuery},
    AppState,
};

use super::{layout, non_empty, parse_field};

/// Book form submission; every field arrives as text
#[derive(Debug, Default, Deserialize)]
pub struct BookForm {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publication_year: Option<String>,
    pub pages: Option<String>,
    pub value: Option<String>,
    pub category_id: Option<String>,
    pub publisher_id: Option<String>,
    pub format_id: Option<String>,
}

impl BookForm {
    fn into_input(self) -> BookInput {
        BookInput {
            title: non_empty(self.title),
            author: non_empty(self.author),
            publication_year: parse_field(self.publication_year),
            pages: parse_field(self.pages),
            value: parse_field(self.value),
            category_id: parse_field(self.category_id),
            publisher_id: parse_field(self.publisher_id),
            format_id: parse_field(self.format_id),
        }
    }
}

/// Book table page with search box
pub async fn books_page(
    State(state): State<AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Markup> {
    let books = state.services.books.list(&query).await?;

    let content = html! {
        form method="GET" action="/web/books" {
            input name="title" type="text" placeholder="Search by title"
                value=[query.title.as_deref()];
            button { "Search" }
        }
        p { a href="/web/books/new" { "New book" } }
        table border="1" {
            thead { tr {
                th { "ID" }
                th { "Title" }
                th { "Author" }
                th { "Year" }
                th { "Pages" }
                th { "Value" }
                th { "Category" }
                th { "Publisher" }
                th { "Format" }
                th { "Actions" }
            } }
            tbody {
                @for book in &books {
                    tr {
                        td { (book.id) }
                        td { (book.title) }
                        td { (book.author) }
                        td { (book.publication_year) }
                        td { (book.pages) }
                        td { "$" (book.value) }
                        td { (book.category_description.as_deref().unwrap_or("-")) }
                        td { (book.publisher_name.as_deref().unwrap_or("-")) }
                        td { (book.format_description.as_deref().unwrap_or("-")) }
                        td {
                            a href={ "/web/books/" (book.id) "/edit" } { "Edit" }
                            " "
                            form method="POST" action={ "/web/books/" (book.id) "/delete" }
                                style="display: inline" {
                                button { "Del" }
                            }
                        }
                    }
                }
            }
        }
    };

    Ok(layout("Books", None, content))
}

/// Shared create/edit form with foreign-key dropdowns
async fn book_form(
    state: &AppState,
    book: Option<&Book>,
    error: Option<&str>,
) -> AppResult<Markup> {
    let categories = state
        .services
        .lookups
        .list_categories(&Default::default())
        .await?;
    let publishers = state
        .services
        .lookups
        .list_publishers(&Default::default())
        .await?;
    let formats = state
        .services
        .lookups
        .list_formats(&Default::default())
        .await?;

    let (title, action) = match book {
        Some(b) => ("Edit book", format!("/web/books/{}", b.id)),
        None => ("New book", "/web/books".to_string()),
    };

    let content = html! {
        form method="POST" action=(action) {
            p { label { "Title " }
                input name="title" type="text" value=[book.map(|b| b.title.as_str())]; }
            p { label { "Author " }
                input name="author" type="text" value=[book.map(|b| b.author.as_str())]; }
            p { label { "Publication year " }
                input name="publication_year" type="number"
                    value=[book.map(|b| b.publication_year)]; }
            p { label { "Pages " }
                input name="pages" type="number" value=[book.map(|b| b.pages)]; }
            p { label { "Value " }
                input name="value" type="text" value=[book.map(|b| b.value)]; }
            p { label { "Category " }
                select name="category_id" {
                    option value="" { "-" }
                    @for c in &categories {
                        option value=(c.id)
                            selected[book.map(|b| b.category_id) == Some(c.id)] {
                            (c.description)
                        }
                    }
                } }
            p { label { "Publisher " }
                select name="publisher_id" {
                    option value="" { "-" }
                    @for p in &publishers {
                        option value=(p.id)
                            selected[book.map(|b| b.publisher_id) == Some(p.id)] {
                            (p.name)
                        }
                    }
                } }
            p { label { "Format " }
                select name="format_id" {
                    option value="" { "-" }
                    @for f in &formats {
                        option value=(f.id)
                            selected[book.map(|b| b.format_id) == Some(f.id)] {
                            (f.description)
                        }
                    }
                } }
            button { "Save" }
            " "
            a href="/web/books" { "Cancel" }
        }
    };

    Ok(layout(title, error, content))
}

/// New book form page
pub async fn new_book_page(State(state): State<AppState>) -> AppResult<Markup> {
    book_form(&state, None, None).await
}

/// Edit book form page
pub async fn edit_book_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Markup> {
    let book = state.services.books.get(id).await?;
    book_form(&state, Some(&book), None).await
}

fn is_client_error(e: &AppError) -> bool {
    matches!(
        e,
        AppError::MissingField(_)
            | AppError::NegativeValue
            | AppError::DuplicateTitle(_)
            | AppError::Validation(_)
    )
}

/// Create from the form; validation errors re-render the form
pub async fn create_book(
    State(state): State<AppState>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    match state.services.books.create(form.into_input()).await {
        Ok(_) => Ok(Redirect::to("/web/books").into_response()),
        Err(e) if is_client_error(&e) => {
            Ok(book_form(&state, None, Some(&e.to_string())).await?.into_response())
        }
        Err(e) => Err(e),
    }
}

/// Update from the form; validation errors re-render the form
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    match state.services.books.update(id, form.into_input()).await {
        Ok(_) => Ok(Redirect::to("/web/books").into_response()),
        Err(e) if is_client_error(&e) => {
            let book = state.services.books.get(id).await?;
            Ok(book_form(&state, Some(&book), Some(&e.to_string()))
                .await?
                .into_response())
        }
        Err(e) => Err(e),
    }
}

/// Delete from the table row button
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    state.services.books.delete(id).await?;
    Ok(Redirect::to("/web/books"))
}
