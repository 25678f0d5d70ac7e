//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, categories, cities, formats, health, logs, publishers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libcat API",
        version = "0.1.0",
        description = "Library Catalog Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Categories
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        // Publishers
        publishers::list_publishers,
        publishers::get_publisher,
        publishers::create_publisher,
        publishers::update_publisher,
        publishers::delete_publisher,
        // Formats
        formats::list_formats,
        formats::get_format,
        formats::create_format,
        formats::update_format,
        formats::delete_format,
        // Cities
        cities::list_cities,
        cities::get_city,
        cities::create_city,
        cities::update_city,
        cities::delete_city,
        cities::list_states,
        // Logs
        logs::list_logs,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::BookInput,
            // Categories
            crate::models::category::Category,
            crate::models::category::CategoryInput,
            // Publishers
            crate::models::publisher::Publisher,
            crate::models::publisher::PublisherInput,
            // Formats
            crate::models::format::Format,
            crate::models::format::FormatInput,
            // Cities
            crate::models::city::City,
            crate::models::city::CityInput,
            crate::models::city::State,
            // Logs
            crate::models::log::LogEntry,
            // Shared
            crate::models::SortOrder,
            // Health
            health::HealthStatus,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog management"),
        (name = "categories", description = "Category management"),
        (name = "publishers", description = "Publisher management"),
        (name = "formats", description = "Format management"),
        (name = "cities", description = "City and state management"),
        (name = "logs", description = "Audit log")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
