//! Categories repository

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::{category::Category, ListQuery},
};

use super::{map_fk_violation, Repository};

fn sort_column(sort: Option<&str>) -> &'static str {
    match sort {
        Some("description") => "description",
        _ => "id",
    }
}

impl Repository {
    /// List categories with optional description filter
    pub async fn categories_list(&self, query: &ListQuery) -> AppResult<Vec<Category>> {
        let (limit, offset) = query.limit_offset();
        let order = query.order.unwrap_or_default();

        let sql = format!(
            "SELECT * FROM categories \
             WHERE ($1::text IS NULL OR description ILIKE $1 ESCAPE '\\') \
             ORDER BY {} {} LIMIT $2 OFFSET $3",
            sort_column(query.sort.as_deref()),
            order.as_sql(),
        );

        let rows = sqlx::query_as::<_, Category>(&sql)
            .bind(query.q.as_deref().map(super::like_pattern))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Get category by ID
    pub async fn categories_get(&self, id: i32) -> AppResult<Category> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    /// Create a category
    pub async fn categories_create(&self, description: &str) -> AppResult<Category> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Category>(
            "INSERT INTO categories (description, created_at, updated_at) \
             VALUES ($1, $2, $2) RETURNING *",
        )
        .bind(description)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a category
    pub async fn categories_update(&self, id: i32, description: &str) -> AppResult<Category> {
        let now = Utc::now();
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET description = $1, updated_at = $2 WHERE id = $3 RETURNING *",
        )
        .bind(description)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    /// Delete a category; fails while books still reference it
    pub async fn categories_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_fk_violation(e, "Category is still referenced by books"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }
        Ok(())
    }
}
