use assetdesk_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};
use axum::{Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct LivenessResponse {
    pub status: String,
    pub response_time_ms: u64,
}

#[utoipa::path(
    get,
    path = "/health/live",
    tag = "health",
    summary = "Liveness check",
    responses(
        (status = 200, body = LivenessResponse),
        (status = 500, description = "Database unreachable")
    )
)]
pub async fn health_live(
    State(state): State<AppState>,
) -> Result<Response<LivenessResponse>, ApiError> {
    let response_time_ms = state.service.health().await?;

    Ok(Response::OK(LivenessResponse {
        status: "UP".to_string(),
        response_time_ms,
    }))
}

#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "health",
    summary = "Readiness check",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 500, description = "Database unreachable")
    )
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readness().await.inspect_err(|e| {
        warn!("readiness check failed: {}", e);
    })?;

    Ok(Response::OK(status))
}

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health/live", root_path), get(health_live))
        .route(&format!("{}/health/ready", root_path), get(health_ready))
}
