//! Operational routes: liveness, database readiness, build info, OpenAPI document.

use crate::error::AppError;
use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::AnyPool;
use utoipa::OpenApi;

#[derive(Serialize)]
struct Status {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

/// One round trip on a pooled connection.
async fn ping(pool: &AnyPool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

async fn live() -> Json<Status> {
    Json(Status {
        status: "ok",
        database: None,
    })
}

async fn ready(State(state): State<AppState>) -> Response {
    match ping(&state.pool).await {
        Ok(()) => Json(Status {
            status: "ok",
            database: Some("ok"),
        })
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            let body = Status {
                status: "degraded",
                database: Some("unavailable"),
            };
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
    }
}

async fn build_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /health, /ready, /version, /openapi.json.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(live))
        .route("/ready", get(ready))
        .route("/version", get(build_info))
        .route("/openapi.json", get(openapi))
        .with_state(state)
}
