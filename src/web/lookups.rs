//! Lookup entity management pages: categories, publishers, formats, cities.
//!
//! Each table page carries an inline create form; edits get their own page.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use maud::{html, Markup};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{
        category::CategoryInput,
        city::{City, CityInput, State as StateRecord},
        format::FormatInput,
        publisher::PublisherInput,
        ListQuery,
    },
    AppState,
};

use super::{layout, non_empty, parse_field};

fn is_client_error(e: &AppError) -> bool {
    matches!(e, AppError::MissingField(_) | AppError::Validation(_))
}

/// Single-text-field form used by categories, publishers and formats
#[derive(Debug, Default, Deserialize)]
pub struct TextForm {
    pub description: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CityForm {
    pub name: Option<String>,
    pub state_id: Option<String>,
}

impl CityForm {
    fn into_input(self) -> CityInput {
        CityInput {
            name: non_empty(self.name),
            state_id: parse_field(self.state_id),
        }
    }
}

/// Table + inline create form for a simple text-field entity
fn simple_table(
    title: &str,
    base: &str,
    field: &str,
    rows: &[(i32, String)],
    error: Option<&str>,
) -> Markup {
    let content = html! {
        form method="POST" action=(base) {
            input name=(field) type="text" placeholder=(field);
            button { "Add" }
        }
        table border="1" {
            thead { tr { th { "ID" } th { (field) } th { "Actions" } } }
            tbody {
                @for (id, label) in rows {
                    tr {
                        td { (id) }
                        td { (label) }
                        td {
                            a href={ (base) "/" (id) "/edit" } { "Edit" }
                            " "
                            form method="POST" action={ (base) "/" (id) "/delete" }
                                style="display: inline" {
                                button { "Del" }
                            }
                        }
                    }
                }
            }
        }
    };
    layout(title, error, content)
}

/// Edit page for a simple text-field entity
fn simple_edit(title: &str, action: &str, field: &str, value: &str, error: Option<&str>) -> Markup {
    let content = html! {
        form method="POST" action=(action) {
            input name=(field) type="text" value=(value);
            button { "Save" }
        }
    };
    layout(title, error, content)
}

// ---- Categories ----

async fn categories_table(state: &AppState, error: Option<&str>) -> AppResult<Markup> {
    let rows: Vec<(i32, String)> = state
        .services
        .lookups
        .list_categories(&ListQuery::default())
        .await?
        .into_iter()
        .map(|c| (c.id, c.description))
        .collect();
    Ok(simple_table("Categories", "/web/categories", "description", &rows, error))
}

pub async fn categories_page(State(state): State<AppState>) -> AppResult<Markup> {
    categories_table(&state, None).await
}

pub async fn edit_category_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Markup> {
    let category = state.services.lookups.get_category(id).await?;
    Ok(simple_edit(
        "Edit category",
        &format!("/web/categories/{}", id),
        "description",
        &category.description,
        None,
    ))
}

pub async fn create_category(
    State(state): State<AppState>,
    Form(form): Form<TextForm>,
) -> AppResult<Response> {
    let input = CategoryInput { description: non_empty(form.description) };
    match state.services.lookups.create_category(input).await {
        Ok(_) => Ok(Redirect::to("/web/categories").into_response()),
        Err(e) if is_client_error(&e) => {
            Ok(categories_table(&state, Some(&e.to_string())).await?.into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<TextForm>,
) -> AppResult<Response> {
    let input = CategoryInput { description: non_empty(form.description) };
    match state.services.lookups.update_category(id, input).await {
        Ok(_) => Ok(Redirect::to("/web/categories").into_response()),
        Err(e) if is_client_error(&e) => Ok(simple_edit(
            "Edit category",
            &format!("/web/categories/{}", id),
            "description",
            "",
            Some(&e.to_string()),
        )
        .into_response()),
        Err(e) => Err(e),
    }
}

pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    match state.services.lookups.delete_category(id).await {
        Ok(()) => Ok(Redirect::to("/web/categories").into_response()),
        Err(e) if is_client_error(&e) => {
            Ok(categories_table(&state, Some(&e.to_string())).await?.into_response())
        }
        Err(e) => Err(e),
    }
}

// ---- Publishers ----

async fn publishers_table(state: &AppState, error: Option<&str>) -> AppResult<Markup> {
    let rows: Vec<(i32, String)> = state
        .services
        .lookups
        .list_publishers(&ListQuery::default())
        .await?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect();
    Ok(simple_table("Publishers", "/web/publishers", "name", &rows, error))
}

pub async fn publishers_page(State(state): State<AppState>) -> AppResult<Markup> {
    publishers_table(&state, None).await
}

pub async fn edit_publisher_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Markup> {
    let publisher = state.services.lookups.get_publisher(id).await?;
    Ok(simple_edit(
        "Edit publisher",
        &format!("/web/publishers/{}", id),
        "name",
        &publisher.name,
        None,
    ))
}

pub async fn create_publisher(
    State(state): State<AppState>,
    Form(form): Form<TextForm>,
) -> AppResult<Response> {
    let input = PublisherInput { name: non_empty(form.name) };
    match state.services.lookups.create_publisher(input).await {
        Ok(_) => Ok(Redirect::to("/web/publishers").into_response()),
        Err(e) if is_client_error(&e) => {
            Ok(publishers_table(&state, Some(&e.to_string())).await?.into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn update_publisher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<TextForm>,
) -> AppResult<Response> {
    let input = PublisherInput { name: non_empty(form.name) };
    match state.services.lookups.update_publisher(id, input).await {
        Ok(_) => Ok(Redirect::to("/web/publishers").into_response()),
        Err(e) if is_client_error(&e) => Ok(simple_edit(
            "Edit publisher",
            &format!("/web/publishers/{}", id),
            "name",
            "",
            Some(&e.to_string()),
        )
        .into_response()),
        Err(e) => Err(e),
    }
}

pub async fn delete_publisher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    match state.services.lookups.delete_publisher(id).await {
        Ok(()) => Ok(Redirect::to("/web/publishers").into_response()),
        Err(e) if is_client_error(&e) => {
            Ok(publishers_table(&state, Some(&e.to_string())).await?.into_response())
        }
        Err(e) => Err(e),
    }
}

// ---- Formats ----

async fn formats_table(state: &AppState, error: Option<&str>) -> AppResult<Markup> {
    let rows: Vec<(i32, String)> = state
        .services
        .lookups
        .list_formats(&ListQuery::default())
        .await?
        .into_iter()
        .map(|f| (f.id, f.description))
        .collect();
    Ok(simple_table("Formats", "/web/formats", "description", &rows, error))
}

pub async fn formats_page(State(state): State<AppState>) -> AppResult<Markup> {
    formats_table(&state, None).await
}

pub async fn edit_format_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Markup> {
    let format = state.services.lookups.get_format(id).await?;
    Ok(simple_edit(
        "Edit format",
        &format!("/web/formats/{}", id),
        "description",
        &format.description,
        None,
    ))
}

pub async fn create_format(
    State(state): State<AppState>,
    Form(form): Form<TextForm>,
) -> AppResult<Response> {
    let input = FormatInput { description: non_empty(form.description) };
    match state.services.lookups.create_format(input).await {
        Ok(_) => Ok(Redirect::to("/web/formats").into_response()),
        Err(e) if is_client_error(&e) => {
            Ok(formats_table(&state, Some(&e.to_string())).await?.into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn update_format(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<TextForm>,
) -> AppResult<Response> {
    let input = FormatInput { description: non_empty(form.description) };
    match state.services.lookups.update_format(id, input).await {
        Ok(_) => Ok(Redirect::to("/web/formats").into_response()),
        Err(e) if is_client_error(&e) => Ok(simple_edit(
            "Edit format",
            &format!("/web/formats/{}", id),
            "description",
            "",
            Some(&e.to_string()),
        )
        .into_response()),
        Err(e) => Err(e),
    }
}

pub async fn delete_format(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    match state.services.lookups.delete_format(id).await {
        Ok(()) => Ok(Redirect::to("/web/formats").into_response()),
        Err(e) if is_client_error(&e) => {
            Ok(formats_table(&state, Some(&e.to_string())).await?.into_response())
        }
        Err(e) => Err(e),
    }
}

// ---- Cities ----

fn city_form_markup(city: Option<&City>, states: &[StateRecord], action: &str) -> Markup {
    html! {
        form method="POST" action=(action) {
            input name="name" type="text" placeholder="name"
                value=[city.map(|c| c.name.as_str())];
            select name="state_id" {
                option value="" { "-" }
                @for st in states {
                    option value=(st.id)
                        selected[city.map(|c| c.state_id) == Some(st.id)] {
                        (st.name) " (" (st.abbreviation) ")"
                    }
                }
            }
            button { "Save" }
        }
    }
}

async fn cities_table(state: &AppState, error: Option<&str>) -> AppResult<Markup> {
    let cities = state.services.lookups.list_cities(&ListQuery::default()).await?;
    let states = state.services.lookups.list_states().await?;

    let content = html! {
        (city_form_markup(None, &states, "/web/cities"))
        table border="1" {
            thead { tr { th { "ID" } th { "Name" } th { "State" } th { "Actions" } } }
            tbody {
                @for city in &cities {
                    tr {
                        td { (city.id) }
                        td { (city.name) }
                        td { (city.state_name.as_deref().unwrap_or("-")) }
                        td {
                            a href={ "/web/cities/" (city.id) "/edit" } { "Edit" }
                            " "
                            form method="POST" action={ "/web/cities/" (city.id) "/delete" }
                                style="display: inline" {
                                button { "Del" }
                            }
                        }
                    }
                }
            }
        }
    };
    Ok(layout("Cities", error, content))
}

pub async fn cities_page(State(state): State<AppState>) -> AppResult<Markup> {
    cities_table(&state, None).await
}

pub async fn edit_city_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Markup> {
    let city = state.services.lookups.get_city(id).await?;
    let states = state.services.lookups.list_states().await?;
    Ok(layout(
        "Edit city",
        None,
        city_form_markup(Some(&city), &states, &format!("/web/cities/{}", id)),
    ))
}

pub async fn create_city(
    State(state): State<AppState>,
    Form(form): Form<CityForm>,
) -> AppResult<Response> {
    match state.services.lookups.create_city(form.into_input()).await {
        Ok(_) => Ok(Redirect::to("/web/cities").into_response()),
        Err(e) if is_client_error(&e) => {
            Ok(cities_table(&state, Some(&e.to_string())).await?.into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn update_city(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<CityForm>,
) -> AppResult<Response> {
    match state.services.lookups.update_city(id, form.into_input()).await {
        Ok(_) => Ok(Redirect::to("/web/cities").into_response()),
        Err(e) if is_client_error(&e) => {
            Ok(cities_table(&state, Some(&e.to_string())).await?.into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn delete_city(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    state.services.lookups.delete_city(id).await?;
    Ok(Redirect::to("/web/cities"))
}
