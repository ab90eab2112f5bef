//! Shared application state. Holds only the pool; sessions are acquired per request.

use sqlx::AnyPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
}
