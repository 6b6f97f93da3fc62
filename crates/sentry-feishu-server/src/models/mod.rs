//! API DTOs (Data Transfer Objects)

pub mod health;
pub mod webhook;

pub use health::{HealthCheck, ServiceInfo};
pub use webhook::{ErrorResponse, TestNotificationResponse, WebhookResponse};
