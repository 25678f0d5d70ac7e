//! Format model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Format record (hardcover, paperback, e-book, ...)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Format {
    pub id: i32,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update format request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct FormatInput {
    pub description: Option<String>,
}
