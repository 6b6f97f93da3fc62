//! Liveness Routes

use axum::{routing::get, Json, Router};

use crate::models::{HealthCheck, ServiceInfo};
use crate::AppState;

/// Service information
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service information", body = ServiceInfo)),
    tag = "Health"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "Sentry to Feishu Webhook".to_string(),
        status: "running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is healthy", body = HealthCheck)),
    tag = "Health"
)]
pub async fn health() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "healthy".to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
}
