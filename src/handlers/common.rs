//! Root banner, liveness, readiness and version.

use crate::state::AppState;
use crate::store;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::time::Duration;

pub const BANNER: &str = "Backend is running";

/// Upper bound on the readiness round-trip, independent of the pool's acquire timeout.
pub const READY_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Serialize)]
pub struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
pub struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses((status = 200, description = "Banner", body = String))
)]
pub async fn root() -> Json<&'static str> {
    Json(BANNER)
}

pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

pub async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    let outcome = match tokio::time::timeout(READY_TIMEOUT, store::ping(&state.pool)).await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(_) => Err(format!("no answer within {:?}", READY_TIMEOUT)),
    };
    if let Err(e) = outcome {
        tracing::warn!(error = %e, "readiness check failed");
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: "unavailable",
            }),
        ));
    }
    Ok(Json(ReadyBody {
        status: "ok",
        database: "ok",
    }))
}

pub async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn root_returns_banner() {
        let Json(body) = root().await;
        assert_eq!(body, "Backend is running");
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
    }

    #[tokio::test]
    async fn version_names_the_package() {
        let Json(body) = version().await;
        assert_eq!(body["name"], "stocks-backend");
    }
}
