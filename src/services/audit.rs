//! Audit log service

use crate::{
    error::AppResult,
    models::{log::LogEntry, ListQuery},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuditService {
    repository: Repository,
}

impl AuditService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List audit entries, newest first
    pub async fn list(&self, query: &ListQuery) -> AppResult<Vec<LogEntry>> {
        self.repository.logs_list(query).await
    }
}
