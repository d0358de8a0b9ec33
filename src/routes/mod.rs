//! Router assembly.

pub mod common;
pub mod stocks;

pub use common::common_routes;
pub use stocks::stock_routes;

use crate::openapi::openapi_routes;
use crate::state::AppState;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Any origin, method and header, with credentials. Wildcards cannot be
/// combined with credentials, so the request values are mirrored instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// The full application: common routes, `/api/stocks`, and `/openapi.json`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", stock_routes(state))
        .merge(openapi_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
