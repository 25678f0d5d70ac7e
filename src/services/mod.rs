//! Business logic services

pub mod audit;
pub mod books;
pub mod lookups;

use crate::{
    error::{AppError, AppResult},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub lookups: lookups::LookupsService,
    pub audit: audit::AuditService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BooksService::new(repository.clone()),
            lookups: lookups::LookupsService::new(repository.clone()),
            audit: audit::AuditService::new(repository.clone()),
            repository,
        }
    }

    /// Check that the backing database is reachable
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}

/// Required-field check for text attributes: present and non-empty after
/// trimming, otherwise the first missing attribute is reported by name.
pub(crate) fn required_text(value: &Option<String>, name: &'static str) -> AppResult<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(AppError::MissingField(name)),
    }
}

/// Required-field check for non-text attributes
pub(crate) fn required<T: Copy>(value: &Option<T>, name: &'static str) -> AppResult<T> {
    value.ok_or(AppError::MissingField(name))
}
