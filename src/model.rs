//! Item record, write payload, and search criteria.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A persisted item. `id` is assigned by storage on insert and never rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Stored as a float column; fractional quantities round-trip.
    pub quantity: f64,
}

/// Body for create and update. Any `id` key in the request is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewItem {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: f64,
}

/// Search criteria; each `None` adds no constraint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemSearch {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    /// Case-insensitive substring of the description.
    pub description: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    /// Exact quantity.
    pub quantity: Option<f64>,
}
