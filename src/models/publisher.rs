//! Publisher model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Publisher record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Publisher {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update publisher request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PublisherInput {
    pub name: Option<String>,
}
