//! Item CRUD and search routes. Collection paths answer with and without the trailing slash.

use crate::handlers::items::{create, delete as delete_handler, list, read, search, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn item_routes(state: AppState) -> Router {
    Router::new()
        .route("/items", get(list).post(create))
        .route("/items/", get(list).post(create))
        .route("/items/search/", get(search))
        .route("/items/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
