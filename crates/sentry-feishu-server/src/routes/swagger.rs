//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    ErrorResponse, HealthCheck, ServiceInfo, TestNotificationResponse, WebhookResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::sentry::receive_sentry_webhook,
        super::feishu::test_feishu_notification,
        super::health::root,
        super::health::health,
    ),
    components(schemas(
        WebhookResponse,
        TestNotificationResponse,
        ErrorResponse,
        ServiceInfo,
        HealthCheck,
    )),
    tags(
        (name = "Webhook", description = "Sentry webhook intake and Feishu delivery"),
        (name = "Health", description = "Liveness and service information"),
    ),
    info(
        title = "Sentry to Feishu Webhook",
        description = "Forwards Sentry issue alerts to a Feishu group bot as interactive cards",
    )
)]
pub struct ApiDoc;
