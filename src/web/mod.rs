//! Server-rendered management pages.
//!
//! Presentation glue over the same services the JSON API uses: maud tables
//! and forms, one mutation per POST, redirect back to the table afterwards.

pub mod books;
pub mod lookups;

use maud::{html, Markup, DOCTYPE};

/// Shared page chrome: nav, heading, optional error banner
pub fn layout(title: &str, error: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) " - Libcat" }
            }
            body {
                nav {
                    a href="/web/books" { "Books" }
                    " | "
                    a href="/web/categories" { "Categories" }
                    " | "
                    a href="/web/publishers" { "Publishers" }
                    " | "
                    a href="/web/formats" { "Formats" }
                    " | "
                    a href="/web/cities" { "Cities" }
                }
                h1 { (title) }
                @if let Some(msg) = error {
                    p style="color: red" { (msg) }
                }
                (content)
            }
        }
    }
}

/// Empty form values become `None`; everything else is trimmed
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Parse an optional numeric form field; empty and unparsable both map to
/// `None` so the validation layer reports the attribute as missing
pub(crate) fn parse_field<T: std::str::FromStr>(value: Option<String>) -> Option<T> {
    non_empty(value).and_then(|s| s.parse().ok())
}
