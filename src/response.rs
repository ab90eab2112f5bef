//! Response bodies that are not an `Item`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Confirmation body, e.g. after a delete.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Message {
    pub message: String,
}

pub fn deleted(id: i64) -> Message {
    Message {
        message: format!("Item with id {} deleted successfully.", id),
    }
}
