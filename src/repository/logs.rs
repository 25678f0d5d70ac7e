//! Audit log repository.
//!
//! Log rows are appended by the book mutations in `books.rs`; this module
//! only reads them back.

use crate::{
    error::AppResult,
    models::{log::LogEntry, ListQuery},
};

use super::Repository;

impl Repository {
    /// List audit entries, newest first
    pub async fn logs_list(&self, query: &ListQuery) -> AppResult<Vec<LogEntry>> {
        let (limit, offset) = query.limit_offset();

        let rows = sqlx::query_as::<_, LogEntry>(
            "SELECT id, action, created_at FROM logs \
             ORDER BY id DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
