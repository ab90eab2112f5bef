//! Item storage operations. Each call runs on a borrowed connection; "not found" is `None`/`false`,
//! never an error. Only storage faults return `Err`.

use crate::error::AppError;
use crate::model::{Item, ItemSearch, NewItem};
use crate::sql::{self, QueryBuf};
use sqlx::any::Any;
use sqlx::AnyConnection;

pub struct ItemService;

impl ItemService {
    /// Insert one row. Returns it with the generated id.
    pub async fn create(conn: &mut AnyConnection, item: &NewItem) -> Result<Item, AppError> {
        let q = sql::insert(item);
        Self::fetch_optional(conn, q)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Fetch one row by primary key.
    pub async fn retrieve(conn: &mut AnyConnection, id: i64) -> Result<Option<Item>, AppError> {
        Self::fetch_optional(conn, sql::select_by_id(id)).await
    }

    pub async fn retrieve_all(conn: &mut AnyConnection) -> Result<Vec<Item>, AppError> {
        Self::fetch_all(conn, sql::select_all()).await
    }

    /// Overwrite every writable field of row `id`.
    /// `None` when no such row exists; nothing is written then.
    pub async fn update(
        conn: &mut AnyConnection,
        id: i64,
        item: &NewItem,
    ) -> Result<Option<Item>, AppError> {
        Self::fetch_optional(conn, sql::update(id, item)).await
    }

    /// Delete row `id`. Returns whether a row was removed.
    pub async fn delete(conn: &mut AnyConnection, id: i64) -> Result<bool, AppError> {
        let q = sql::delete(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let mut query = sqlx::query::<Any>(&q.sql);
        for p in q.params {
            query = query.bind(p);
        }
        let result = query.execute(&mut *conn).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Rows matching all supplied criteria; no criteria returns every row.
    pub async fn search(
        conn: &mut AnyConnection,
        criteria: &ItemSearch,
    ) -> Result<Vec<Item>, AppError> {
        Self::fetch_all(conn, sql::search(criteria)).await
    }

    async fn fetch_optional(
        conn: &mut AnyConnection,
        q: QueryBuf,
    ) -> Result<Option<Item>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<Any, Item>(&q.sql);
        for p in q.params {
            query = query.bind(p);
        }
        Ok(query.fetch_optional(&mut *conn).await?)
    }

    async fn fetch_all(conn: &mut AnyConnection, q: QueryBuf) -> Result<Vec<Item>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<Any, Item>(&q.sql);
        for p in q.params {
            query = query.bind(p);
        }
        Ok(query.fetch_all(&mut *conn).await?)
    }
}
