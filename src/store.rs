//! Pool setup and `items` DDL. The table and its indexes are created at startup if absent;
//! column types follow the connected backend.

use crate::config::ServerConfig;
use crate::error::{AppError, ConfigError};
use crate::sql::ITEMS_TABLE;
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

/// Database backends the service can run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    /// Map a driver name as reported by `AnyConnection::backend_name`.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "PostgreSQL" => Ok(Backend::Postgres),
            "SQLite" => Ok(Backend::Sqlite),
            other => Err(ConfigError::UnsupportedBackend(other.to_string())),
        }
    }

    fn items_ddl(self) -> String {
        let (id, float) = match self {
            Backend::Postgres => ("BIGSERIAL PRIMARY KEY", "DOUBLE PRECISION"),
            Backend::Sqlite => ("INTEGER PRIMARY KEY AUTOINCREMENT", "REAL"),
        };
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                id {id},
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                price {float} NOT NULL,
                quantity {float} NOT NULL
            )
            "#,
            table = ITEMS_TABLE,
            id = id,
            float = float
        )
    }
}

/// Columns that get a lookup index.
const INDEXED_COLUMNS: &[&str] = &["name", "description", "price"];

/// Open a pool for `config.database_url`. Accepts `postgres://` and `sqlite:` URLs.
pub async fn connect(config: &ServerConfig) -> Result<AnyPool, AppError> {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// Create `items` and its indexes if they do not exist. Returns the detected backend.
pub async fn ensure_items_table(pool: &AnyPool) -> Result<Backend, AppError> {
    let mut conn = pool.acquire().await?;
    let backend = Backend::from_name(conn.backend_name())?;

    sqlx::query(&backend.items_ddl()).execute(&mut *conn).await?;
    for col in INDEXED_COLUMNS {
        let ddl = format!(
            "CREATE INDEX IF NOT EXISTS ix_{table}_{col} ON {table} ({col})",
            table = ITEMS_TABLE,
            col = col
        );
        sqlx::query(&ddl).execute(&mut *conn).await?;
    }
    tracing::info!(backend = ?backend, table = ITEMS_TABLE, "schema ready");
    Ok(backend)
}
