//! Webhook DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::RelayOutcome;

/// Result of processing one Sentry webhook
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WebhookResponse {
    /// "success" or "ignored"
    pub status: String,
    pub message: String,
    /// Envelope action, or "direct" for bare issue payloads
    pub action: String,
}

impl From<RelayOutcome> for WebhookResponse {
    fn from(outcome: RelayOutcome) -> Self {
        match outcome {
            RelayOutcome::Sent { action } => Self {
                status: "success".to_string(),
                message: "Notification sent to Feishu".to_string(),
                action,
            },
            RelayOutcome::Ignored { message, action } => Self {
                status: "ignored".to_string(),
                message,
                action,
            },
        }
    }
}

/// Result of a test notification
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TestNotificationResponse {
    pub status: String,
    pub message: String,
}

/// Error body returned with 4xx/5xx statuses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
