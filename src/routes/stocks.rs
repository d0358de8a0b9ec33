//! Stock CRUD routes, mounted under `/api`.

use crate::handlers::stocks::{create_stock, delete_stock, list_stocks, update_stock};
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

pub fn stock_routes(state: AppState) -> Router {
    Router::new()
        .route("/stocks", get(list_stocks).post(create_stock))
        .route("/stocks/:id", put(update_stock).delete(delete_stock))
        .with_state(state)
}
