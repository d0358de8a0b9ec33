//! Stock CRUD handlers: list, create, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{Payload, StockId};
use crate::model::{StockPayload, StockRecord};
use crate::response::{row_added, row_deleted, row_updated, CreatedBody, MessageBody};
use crate::service::StockService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

#[utoipa::path(
    get,
    path = "/api/stocks",
    tag = "stocks",
    responses(
        (status = 200, description = "All rows ordered by date, then id", body = [StockRecord]),
        (status = 500, description = "Any failure", body = ErrorBody)
    )
)]
pub async fn list_stocks(State(state): State<AppState>) -> Result<Json<Vec<StockRecord>>, AppError> {
    let rows = StockService::list(&state.pool).await?;
    Ok(Json(rows))
}

#[utoipa::path(
    post,
    path = "/api/stocks",
    tag = "stocks",
    request_body = StockPayload,
    responses(
        (status = 201, description = "Row inserted", body = CreatedBody),
        (status = 500, description = "Any failure, including a malformed body", body = ErrorBody)
    )
)]
pub async fn create_stock(
    State(state): State<AppState>,
    Payload(payload): Payload<StockPayload>,
) -> Result<(StatusCode, Json<CreatedBody>), AppError> {
    let id = StockService::create(&state.pool, &payload).await?;
    tracing::info!(id, trade_code = %payload.trade_code, "row added");
    Ok((StatusCode::CREATED, Json(row_added(id))))
}

#[utoipa::path(
    put,
    path = "/api/stocks/{id}",
    tag = "stocks",
    params(("id" = i64, Path, description = "Primary key")),
    request_body = StockPayload,
    responses(
        (status = 200, description = "Update issued; reported even when no row matched", body = MessageBody),
        (status = 500, description = "Any failure", body = ErrorBody)
    )
)]
pub async fn update_stock(
    State(state): State<AppState>,
    StockId(id): StockId,
    Payload(payload): Payload<StockPayload>,
) -> Result<Json<MessageBody>, AppError> {
    let affected = StockService::update(&state.pool, id, &payload).await?;
    if affected == 0 {
        tracing::debug!(id, "update matched no row");
    }
    Ok(Json(row_updated()))
}

#[utoipa::path(
    delete,
    path = "/api/stocks/{id}",
    tag = "stocks",
    params(("id" = i64, Path, description = "Primary key")),
    responses(
        (status = 200, description = "Delete issued; reported even when no row matched", body = MessageBody),
        (status = 500, description = "Any failure", body = ErrorBody)
    )
)]
pub async fn delete_stock(
    State(state): State<AppState>,
    StockId(id): StockId,
) -> Result<Json<MessageBody>, AppError> {
    let affected = StockService::delete(&state.pool, id).await?;
    if affected == 0 {
        tracing::debug!(id, "delete matched no row");
    }
    Ok(Json(row_deleted()))
}
