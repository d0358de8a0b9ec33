//! One statement per call against MySQL.

use crate::error::AppError;
use crate::model::{StockPayload, StockRecord};
use crate::sql::{bind_payload, delete_by_id, insert, select_all, update_by_id};
use sqlx::MySqlPool;

pub struct StockService;

impl StockService {
    /// Every row, ordered by date then id.
    pub async fn list(pool: &MySqlPool) -> Result<Vec<StockRecord>, AppError> {
        let sql = select_all();
        tracing::debug!(sql = %sql, "query");
        let mut conn = pool.acquire().await?;
        let rows = sqlx::query_as::<_, StockRecord>(&sql)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }

    /// Insert one row and return its auto-increment id.
    pub async fn create(pool: &MySqlPool, payload: &StockPayload) -> Result<u64, AppError> {
        let sql = insert();
        tracing::debug!(sql = %sql, params = ?payload, "query");
        let mut tx = pool.begin().await?;
        let result = bind_payload(sqlx::query(&sql), payload)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.last_insert_id())
    }

    /// Overwrite all writable columns of row `id`. Returns rows affected; zero is not an error.
    pub async fn update(pool: &MySqlPool, id: i64, payload: &StockPayload) -> Result<u64, AppError> {
        let sql = update_by_id();
        tracing::debug!(sql = %sql, id, params = ?payload, "query");
        let mut tx = pool.begin().await?;
        let result = bind_payload(sqlx::query(&sql), payload)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected())
    }

    /// Delete row `id`. Returns rows affected; zero is not an error.
    pub async fn delete(pool: &MySqlPool, id: i64) -> Result<u64, AppError> {
        let sql = delete_by_id();
        tracing::debug!(sql = %sql, id, "query");
        let mut tx = pool.begin().await?;
        let result = sqlx::query(&sql).bind(id).execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(result.rows_affected())
    }
}
