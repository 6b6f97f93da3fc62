//! Feishu Test Route
//!
//! Sends a fixed synthetic issue to check the bot integration end to end.

use axum::{extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use tracing::error;

use crate::error::ApiError;
use crate::models::{ErrorResponse, TestNotificationResponse};
use crate::AppState;

/// Synthetic issue used by the test endpoint
pub fn test_issue() -> Value {
    json!({
        "title": "Test Issue: This is a test notification",
        "url": "https://sentry.io/test",
        "project": {"name": "Test Project"},
        "tags": {"environment": "test"},
        "level": "error",
        "culprit": "test.module.function",
        "message": "This is a test message to verify Feishu integration is working correctly."
    })
}

/// Send a test notification
#[utoipa::path(
    post,
    path = "/test/feishu",
    responses(
        (status = 200, description = "Test notification sent", body = TestNotificationResponse),
        (status = 500, description = "Delivery failed", body = ErrorResponse)
    ),
    tag = "Webhook"
)]
pub async fn test_feishu_notification(
    State(state): State<AppState>,
) -> Result<Json<TestNotificationResponse>, ApiError> {
    state.relay.send_issue(&test_issue()).await.map_err(|e| {
        error!(error = %e, "Failed to send test notification");
        ApiError::internal("Failed to send test notification")
    })?;

    Ok(Json(TestNotificationResponse {
        status: "success".to_string(),
        message: "Test notification sent".to_string(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/test/feishu", post(test_feishu_notification))
}
