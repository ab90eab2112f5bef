use items_api::{app, connect, ensure_items_table, AppState, ServerConfig};
use sqlx::AnyPool;

/// In-memory SQLite pool. One connection, so every session sees the same database.
pub async fn memory_pool() -> AnyPool {
    let config = ServerConfig {
        database_url: "sqlite::memory:".into(),
        max_connections: 1,
        ..ServerConfig::default()
    };
    let pool = connect(&config).await.expect("open sqlite pool");
    ensure_items_table(&pool).await.expect("create items table");
    pool
}

#[allow(dead_code)]
pub async fn memory_app() -> axum::Router {
    app(AppState { pool: memory_pool().await }, 64 * 1024)
}
