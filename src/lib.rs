//! Libcat Library Catalog Management System
//!
//! A Rust implementation of the library catalog server, providing a REST
//! JSON API for managing books, categories, publishers, formats and cities,
//! plus server-rendered management pages.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod web;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
