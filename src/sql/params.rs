//! Bind request values to statements in column order.

use crate::model::StockPayload;
use sqlx::mysql::{MySql, MySqlArguments};
use sqlx::query::Query;

pub type MySqlQuery<'q> = Query<'q, MySql, MySqlArguments>;

/// Bind the seven writable fields in the order of [`super::COLUMNS`].
pub fn bind_payload<'q>(query: MySqlQuery<'q>, payload: &'q StockPayload) -> MySqlQuery<'q> {
    query
        .bind(payload.date.as_str())
        .bind(payload.trade_code.as_str())
        .bind(payload.open)
        .bind(payload.high)
        .bind(payload.low)
        .bind(payload.close)
        .bind(payload.volume)
}
