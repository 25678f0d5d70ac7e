//! City and state models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// City record with its joined state label
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct City {
    pub id: i32,
    pub name: String,
    pub state_id: i32,
    pub state_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update city request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CityInput {
    pub name: Option<String>,
    pub state_id: Option<i32>,
}

/// State record (read-only lookup for the city form)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct State {
    pub id: i32,
    pub name: String,
    pub abbreviation: String,
}
