//! Per-request storage session.

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::any::Any;
use sqlx::AnyConnection;
use sqlx::pool::PoolConnection;
use std::ops::{Deref, DerefMut};

/// A pooled connection held for the duration of one request. It goes back to the pool when
/// dropped, whether the handler returned `Ok` or `Err`.
pub struct DbSession(pub PoolConnection<Any>);

#[async_trait]
impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let conn = state.pool.acquire().await?;
        Ok(DbSession(conn))
    }
}

impl Deref for DbSession {
    type Target = AnyConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
