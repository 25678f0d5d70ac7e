//! Cities and states repository

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::{
        city::{City, State},
        ListQuery,
    },
};

use super::{map_fk_violation, Repository};

const CITY_COLUMNS: &str = r#"
    ci.id, ci.name, ci.state_id, st.name AS state_name,
    ci.created_at, ci.updated_at
"#;

fn sort_column(sort: Option<&str>) -> &'static str {
    match sort {
        Some("name") => "ci.name",
        Some("state") => "st.name",
        _ => "ci.id",
    }
}

impl Repository {
    /// List cities with their joined state label
    pub async fn cities_list(&self, query: &ListQuery) -> AppResult<Vec<City>> {
        let (limit, offset) = query.limit_offset();
        let order = query.order.unwrap_or_default();

        let sql = format!(
            "SELECT {CITY_COLUMNS} FROM cities ci \
             LEFT JOIN states st ON st.id = ci.state_id \
             WHERE ($1::text IS NULL OR ci.name ILIKE $1 ESCAPE '\\') \
             ORDER BY {} {} LIMIT $2 OFFSET $3",
            sort_column(query.sort.as_deref()),
            order.as_sql(),
        );

        let rows = sqlx::query_as::<_, City>(&sql)
            .bind(query.q.as_deref().map(super::like_pattern))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Get city by ID
    pub async fn cities_get(&self, id: i32) -> AppResult<City> {
        let sql = format!(
            "SELECT {CITY_COLUMNS} FROM cities ci \
             LEFT JOIN states st ON st.id = ci.state_id WHERE ci.id = $1"
        );

        sqlx::query_as::<_, City>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("City {} not found", id)))
    }

    /// Create a city
    pub async fn cities_create(&self, name: &str, state_id: i32) -> AppResult<City> {
        let now = Utc::now();
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO cities (name, state_id, created_at, updated_at) \
             VALUES ($1, $2, $3, $3) RETURNING id",
        )
        .bind(name)
        .bind(state_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, "State does not exist"))?;

        self.cities_get(id).await
    }

    /// Update a city
    pub async fn cities_update(&self, id: i32, name: &str, state_id: i32) -> AppResult<City> {
        let now = Utc::now();
        let result = sqlx::query(
            "UPDATE cities SET name = $1, state_id = $2, updated_at = $3 WHERE id = $4",
        )
        .bind(name)
        .bind(state_id)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_fk_violation(e, "State does not exist"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("City {} not found", id)));
        }

        self.cities_get(id).await
    }

    /// Delete a city
    pub async fn cities_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("City {} not found", id)));
        }
        Ok(())
    }

    /// List all states, ordered by name
    pub async fn states_list(&self) -> AppResult<Vec<State>> {
        let rows = sqlx::query_as::<_, State>(
            "SELECT id, name, abbreviation FROM states ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
