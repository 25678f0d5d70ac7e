//! Book model and request types.
//!
//! A book row carries its foreign keys plus the joined labels of its
//! category, publisher and format so list pages need a single query.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use super::SortOrder;

/// Full book record (DB + API)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub pages: i32,
    /// Monetary value; never negative
    pub value: Decimal,
    pub category_id: i32,
    pub publisher_id: i32,
    pub format_id: i32,
    /// Joined label; absent if the category row was removed
    pub category_description: Option<String>,
    pub publisher_name: Option<String>,
    pub format_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Candidate book attributes as received from the client.
///
/// Every field is optional at the deserialization boundary so the validation
/// layer can report the first missing attribute by name.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct BookInput {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publication_year: Option<i32>,
    pub pages: Option<i32>,
    pub value: Option<Decimal>,
    pub category_id: Option<i32>,
    pub publisher_id: Option<i32>,
    pub format_id: Option<i32>,
}

/// Sanitized attribute set produced by validation
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub pages: i32,
    pub value: Decimal,
    pub category_id: i32,
    pub publisher_id: i32,
    pub format_id: i32,
}

/// Query parameters for listing books
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct BookQuery {
    /// Case-insensitive substring filter on the title
    pub title: Option<String>,
    /// Maximum number of rows to return (default: 100)
    pub limit: Option<i64>,
    /// 1-based page number (default: 1)
    pub page: Option<i64>,
    /// Column to sort by (default: id)
    pub sort: Option<String>,
    /// Sort direction: asc or desc (default: asc)
    pub order: Option<SortOrder>,
}

impl BookQuery {
    /// Resolved (limit, offset) with the legacy defaults
    pub fn limit_offset(&self) -> (i64, i64) {
        let limit = self.limit.unwrap_or(100).max(1);
        let page = self.page.unwrap_or(1).max(1);
        (limit, (page - 1) * limit)
    }
}
