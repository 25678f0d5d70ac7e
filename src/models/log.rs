//! Audit log model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Append-only audit entry, written alongside every book mutation
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LogEntry {
    pub id: i32,
    pub action: String,
    pub created_at: DateTime<Utc>,
}
