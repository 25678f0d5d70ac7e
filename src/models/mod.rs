//! Data models for Libcat

pub mod book;
pub mod category;
pub mod city;
pub mod format;
pub mod log;
pub mod publisher;

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

// Re-export commonly used types
pub use book::{Book, BookInput, BookQuery, NewBook};
pub use category::Category;
pub use city::{City, State};
pub use format::Format;
pub use log::LogEntry;
pub use publisher::Publisher;

/// Sort direction for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Asc
    }
}

/// Common query parameters for lookup list endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Case-insensitive substring filter on the entity's text field
    pub q: Option<String>,
    /// Maximum number of rows to return (default: 100)
    pub limit: Option<i64>,
    /// 1-based page number (default: 1)
    pub page: Option<i64>,
    /// Column to sort by (default: id)
    pub sort: Option<String>,
    /// Sort direction: asc or desc (default: asc)
    pub order: Option<SortOrder>,
}

impl ListQuery {
    /// Resolved (limit, offset) with the legacy defaults
    pub fn limit_offset(&self) -> (i64, i64) {
        let limit = self.limit.unwrap_or(100).max(1);
        let page = self.page.unwrap_or(1).max(1);
        (limit, (page - 1) * limit)
    }
}
