//! API handlers for the Libcat REST endpoints

pub mod books;
pub mod categories;
pub mod cities;
pub mod formats;
pub mod health;
pub mod logs;
pub mod openapi;
pub mod publishers;
