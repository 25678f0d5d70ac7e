//! Publishers repository

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::{publisher::Publisher, ListQuery},
};

use super::{map_fk_violation, Repository};

fn sort_column(sort: Option<&str>) -> &'static str {
    match sort {
        Some("name") => "name",
        _ => "id",
    }
}

impl Repository {
    /// List publishers with optional name filter
    pub async fn publishers_list(&self, query: &ListQuery) -> AppResult<Vec<Publisher>> {
        let (limit, offset) = query.limit_offset();
        let order = query.order.unwrap_or_default();

        let sql = format!(
            "SELECT * FROM publishers \
             WHERE ($1::text IS NULL OR name ILIKE $1 ESCAPE '\\') \
             ORDER BY {} {} LIMIT $2 OFFSET $3",
            sort_column(query.sort.as_deref()),
            order.as_sql(),
        );

        let rows = sqlx::query_as::<_, Publisher>(&sql)
            .bind(query.q.as_deref().map(super::like_pattern))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Get publisher by ID
    pub async fn publishers_get(&self, id: i32) -> AppResult<Publisher> {
        sqlx::query_as::<_, Publisher>("SELECT * FROM publishers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Publisher {} not found", id)))
    }

    /// Create a publisher
    pub async fn publishers_create(&self, name: &str) -> AppResult<Publisher> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Publisher>(
            "INSERT INTO publishers (name, created_at, updated_at) \
             VALUES ($1, $2, $2) RETURNING *",
        )
        .bind(name)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a publisher
    pub async fn publishers_update(&self, id: i32, name: &str) -> AppResult<Publisher> {
        let now = Utc::now();
        sqlx::query_as::<_, Publisher>(
            "UPDATE publishers SET name = $1, updated_at = $2 WHERE id = $3 RETURNING *",
        )
        .bind(name)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Publisher {} not found", id)))
    }

    /// Delete a publisher; fails while books still reference it
    pub async fn publishers_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM publishers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_fk_violation(e, "Publisher is still referenced by books"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Publisher {} not found", id)));
        }
        Ok(())
    }
}
