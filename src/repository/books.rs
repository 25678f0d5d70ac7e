//! Books repository.
//!
//! Mutations run inside a transaction so the title uniqueness check, the row
//! change and the audit-log append commit together. The `UNIQUE` constraint
//! on `books.title` backstops the check; a 23505 from the driver is mapped
//! back to the duplicate-title error.

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookQuery, NewBook},
};

use super::Repository;

const BOOK_COLUMNS: &str = r#"
    b.id, b.title, b.author, b.publication_year, b.pages, b.value,
    b.category_id, b.publisher_id, b.format_id,
    c.description AS category_description,
    p.name AS publisher_name,
    f.description AS format_description,
    b.created_at, b.updated_at
"#;

const BOOK_JOINS: &str = r#"
    FROM books b
    LEFT JOIN categories c ON c.id = b.category_id
    LEFT JOIN publishers p ON p.id = b.publisher_id
    LEFT JOIN formats f ON f.id = b.format_id
"#;

/// Whitelist for the user-supplied sort column; unknown values fall back to id.
fn sort_column(sort: Option<&str>) -> &'static str {
    match sort {
        Some("title") => "b.title",
        Some("author") => "b.author",
        Some("publication_year") => "b.publication_year",
        Some("pages") => "b.pages",
        Some("value") => "b.value",
        _ => "b.id",
    }
}

fn map_unique_violation(e: sqlx::Error, title: &str) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
            AppError::DuplicateTitle(title.to_string())
        }
        _ => AppError::Database(e),
    }
}

impl Repository {
    /// List books with optional title filter, pagination and sorting
    pub async fn books_search(&self, query: &BookQuery) -> AppResult<Vec<Book>> {
        let (limit, offset) = query.limit_offset();
        let order = query.order.unwrap_or_default();

        let sql = format!(
            "SELECT {BOOK_COLUMNS} {BOOK_JOINS} \
             WHERE ($1::text IS NULL OR b.title ILIKE $1 ESCAPE '\\') \
             ORDER BY {} {} LIMIT $2 OFFSET $3",
            sort_column(query.sort.as_deref()),
            order.as_sql(),
        );

        let pattern = query.title.as_deref().map(super::like_pattern);

        let books = sqlx::query_as::<_, Book>(&sql)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    /// Get a book by ID with its joined labels
    pub async fn books_get(&self, id: i32) -> AppResult<Book> {
        let sql = format!("SELECT {BOOK_COLUMNS} {BOOK_JOINS} WHERE b.id = $1");

        sqlx::query_as::<_, Book>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Create a book and append its audit entry in one transaction
    pub async fn books_create(&self, book: &NewBook) -> AppResult<Book> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let duplicate: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE title = $1)")
                .bind(&book.title)
                .fetch_one(&mut *tx)
                .await?;

        if duplicate {
            return Err(AppError::DuplicateTitle(book.title.clone()));
        }

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO books (
                title, author, publication_year, pages, value,
                category_id, publisher_id, format_id, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING id
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.publication_year)
        .bind(book.pages)
        .bind(book.value)
        .bind(book.category_id)
        .bind(book.publisher_id)
        .bind(book.format_id)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, &book.title))?;

        sqlx::query("INSERT INTO logs (action, created_at) VALUES ($1, $2)")
            .bind(format!("Book: {} created.", book.title))
            .bind(now)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.books_get(id).await
    }

    /// Update a book and append its audit entry in one transaction
    pub async fn books_update(&self, id: i32, book: &NewBook) -> AppResult<Book> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let duplicate: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE title = $1 AND id != $2)")
                .bind(&book.title)
                .bind(id)
                .fetch_one(&mut *tx)
                .await?;

        if duplicate {
            return Err(AppError::DuplicateTitle(book.title.clone()));
        }

        let result = sqlx::query(
            r#"
            UPDATE books SET
                title = $1, author = $2, publication_year = $3, pages = $4,
                value = $5, category_id = $6, publisher_id = $7, format_id = $8,
                updated_at = $9
            WHERE id = $10
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.publication_year)
        .bind(book.pages)
        .bind(book.value)
        .bind(book.category_id)
        .bind(book.publisher_id)
        .bind(book.format_id)
        .bind(now)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, &book.title))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }

        sqlx::query("INSERT INTO logs (action, created_at) VALUES ($1, $2)")
            .bind(format!("Book: {} updated.", book.title))
            .bind(now)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        self.books_get(id).await
    }

    /// Delete a book and append its audit entry in one transaction.
    /// The title is fetched before deletion so the log names the right book.
    pub async fn books_delete(&self, id: i32) -> AppResult<()> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let title: String = sqlx::query_scalar("SELECT title FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("INSERT INTO logs (action, created_at) VALUES ($1, $2)")
            .bind(format!("Book: {} deleted.", title))
            .bind(now)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::sort_column;

    #[test]
    fn sort_column_accepts_whitelisted_names() {
        assert_eq!(sort_column(Some("title")), "b.title");
        assert_eq!(sort_column(Some("value")), "b.value");
    }

    #[test]
    fn sort_column_rejects_unknown_input() {
        assert_eq!(sort_column(Some("title; DROP TABLE books")), "b.id");
        assert_eq!(sort_column(None), "b.id");
    }
}
