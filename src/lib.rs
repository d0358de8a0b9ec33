//! Stocks backend: CRUD over the `stocks` table of a MySQL database.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AppConfig, DbConfig, ServerConfig};
pub use error::{AppError, ConfigError};
pub use model::{StockPayload, StockRecord};
pub use routes::{build_router, common_routes, cors_layer, stock_routes};
pub use service::StockService;
pub use state::AppState;
pub use store::{connect_pool, connect_pool_with_options};
