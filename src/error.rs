//! Typed errors and HTTP mapping.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// The only detail ever sent to clients on failure.
pub const GENERIC_DETAIL: &str = "Database error";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("payload: {0}")]
    Payload(#[from] JsonRejection),
    #[error("path: {0}")]
    Path(#[from] PathRejection),
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::Db(sqlx::Error::PoolTimedOut) => "pool_timeout",
            AppError::Db(sqlx::Error::Io(_)) => "connection",
            AppError::Db(sqlx::Error::Database(_)) => "statement",
            AppError::Db(_) => "database",
            AppError::Payload(_) => "payload",
            AppError::Path(_) => "path",
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(kind = self.kind(), error = %self, "request failed");
        let body = ErrorBody {
            detail: GENERIC_DETAIL.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
