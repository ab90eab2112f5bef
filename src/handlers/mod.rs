//! HTTP handlers for item CRUD and search.

pub mod items;
pub use items::*;
