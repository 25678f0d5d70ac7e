//! Libcat Server - Library Catalog Management System
//!
//! A Rust REST API server for library catalog management.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libcat_server::{api, config::AppConfig, repository::Repository, services::Services, web, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("libcat_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Libcat Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // JSON API routes, one set per entity
    let api = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Books
        .route("/books", get(api::books::list_books))
        .route("/books", post(api::books::create_book))
        .route("/books/:id", get(api::books::get_book))
        .route("/books/:id", put(api::books::update_book))
        .route("/books/:id", delete(api::books::delete_book))
        // Categories
        .route("/categories", get(api::categories::list_categories))
        .route("/categories", post(api::categories::create_category))
        .route("/categories/:id", get(api::categories::get_category))
        .route("/categories/:id", put(api::categories::update_category))
        .route("/categories/:id", delete(api::categories::delete_category))
        // Publishers
        .route("/publishers", get(api::publishers::list_publishers))
        .route("/publishers", post(api::publishers::create_publisher))
        .route("/publishers/:id", get(api::publishers::get_publisher))
        .route("/publishers/:id", put(api::publishers::update_publisher))
        .route("/publishers/:id", delete(api::publishers::delete_publisher))
        // Formats
        .route("/formats", get(api::formats::list_formats))
        .route("/formats", post(api::formats::create_format))
        .route("/formats/:id", get(api::formats::get_format))
        .route("/formats/:id", put(api::formats::update_format))
        .route("/formats/:id", delete(api::formats::delete_format))
        // Cities
        .route("/cities", get(api::cities::list_cities))
        .route("/cities", post(api::cities::create_city))
        .route("/cities/:id", get(api::cities::get_city))
        .route("/cities/:id", put(api::cities::update_city))
        .route("/cities/:id", delete(api::cities::delete_city))
        .route("/states", get(api::cities::list_states))
        // Audit log
        .route("/logs", get(api::logs::list_logs));

    // Server-rendered management pages
    let pages = Router::new()
        .route("/web/books", get(web::books::books_page).post(web::books::create_book))
        .route("/web/books/new", get(web::books::new_book_page))
        .route("/web/books/:id/edit", get(web::books::edit_book_page))
        .route("/web/books/:id", post(web::books::update_book))
        .route("/web/books/:id/delete", post(web::books::delete_book))
        .route(
            "/web/categories",
            get(web::lookups::categories_page).post(web::lookups::create_category),
        )
        .route("/web/categories/:id/edit", get(web::lookups::edit_category_page))
        .route("/web/categories/:id", post(web::lookups::update_category))
        .route("/web/categories/:id/delete", post(web::lookups::delete_category))
        .route(
            "/web/publishers",
            get(web::lookups::publishers_page).post(web::lookups::create_publisher),
        )
        .route("/web/publishers/:id/edit", get(web::lookups::edit_publisher_page))
        .route("/web/publishers/:id", post(web::lookups::update_publisher))
        .route("/web/publishers/:id/delete", post(web::lookups::delete_publisher))
        .route(
            "/web/formats",
            get(web::lookups::formats_page).post(web::lookups::create_format),
        )
        .route("/web/formats/:id/edit", get(web::lookups::edit_format_page))
        .route("/web/formats/:id", post(web::lookups::update_format))
        .route("/web/formats/:id/delete", post(web::lookups::delete_format))
        .route(
            "/web/cities",
            get(web::lookups::cities_page).post(web::lookups::create_city),
        )
        .route("/web/cities/:id/edit", get(web::lookups::edit_city_page))
        .route("/web/cities/:id", post(web::lookups::update_city))
        .route("/web/cities/:id/delete", post(web::lookups::delete_city));

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .merge(api)
        .merge(pages)
        .with_state(state)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
