//! Repository layer for database operations

pub mod books;
pub mod categories;
pub mod cities;
pub mod formats;
pub mod logs;
pub mod publishers;

use sqlx::{Pool, Postgres};

use crate::error::{AppError, AppResult};

/// Main repository struct holding the database connection pool.
///
/// Entity operations live in the submodules as prefixed methods
/// (`books_create`, `categories_list`, ...).
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Verify the database connection is alive
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Build a substring pattern for `ILIKE ... ESCAPE '\'`, escaping LIKE
/// metacharacters so `%` and `_` in the filter text match literally.
pub(crate) fn like_pattern(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Map a foreign-key violation (Postgres 23503) to a client error,
/// anything else stays a database error.
pub(crate) fn map_fk_violation(e: sqlx::Error, message: &str) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23503") => {
            AppError::Validation(message.to_string())
        }
        _ => AppError::Database(e),
    }
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn like_pattern_wraps_plain_text() {
        assert_eq!(like_pattern("dune"), "%dune%");
    }

    #[test]
    fn like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\temp"), "%c:\\\\temp%");
    }
}
