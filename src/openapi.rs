//! OpenAPI document served at `/openapi.json`.

use crate::error::ErrorBody;
use crate::model::{StockPayload, StockRecord};
use crate::response::{CreatedBody, MessageBody};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Stocks backend"),
    paths(
        crate::handlers::common::root,
        crate::handlers::stocks::list_stocks,
        crate::handlers::stocks::create_stock,
        crate::handlers::stocks::update_stock,
        crate::handlers::stocks::delete_stock,
    ),
    components(schemas(StockRecord, StockPayload, CreatedBody, MessageBody, ErrorBody)),
    tags((name = "stocks", description = "Daily stock price records"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn openapi_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}
