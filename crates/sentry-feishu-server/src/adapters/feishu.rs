//! Feishu Notifier
//!
//! Delivers cards to a Feishu custom bot webhook using reqwest.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info};

use sentry_feishu::{
    validate_webhook_url, CardNotifier, ChatCard, Delivered, DeliveryError, InteractiveMessage,
};

/// Configuration for the outbound client
#[derive(Debug, Clone)]
pub struct FeishuNotifierConfig {
    /// Upper bound for one delivery, connect to last byte
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for FeishuNotifierConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "Sentry-Feishu-Relay/1.0".to_string(),
        }
    }
}

/// HTTP implementation of CardNotifier
///
/// Holds one pooled client shared by all in-flight deliveries.
pub struct FeishuNotifier {
    client: Client,
    webhook_url: String,
}

impl FeishuNotifier {
    pub fn new(webhook_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::with_config(webhook_url, FeishuNotifierConfig::default())
    }

    pub fn with_config(
        webhook_url: impl Into<String>,
        config: FeishuNotifierConfig,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            webhook_url: webhook_url.into(),
        })
    }
}

#[async_trait]
impl CardNotifier for FeishuNotifier {
    async fn deliver(&self, card: &ChatCard) -> Result<Delivered, DeliveryError> {
        validate_webhook_url(&self.webhook_url)
            .inspect_err(|e| error!(error = %e, "Refusing to deliver"))?;

        let body = serde_json::to_vec(&InteractiveMessage::new(card.clone())).map_err(|e| {
            DeliveryError::transport(format!("Failed to serialize card: {e}"))
        })?;

        let response = self
            .client
            .post(&self.webhook_url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to send to Feishu");
                DeliveryError::transport(e.to_string())
            })?;

        let status = response.status().as_u16();
        let response_body = response.text().await.map_err(|e| {
            error!(status = %status, error = %e, "Failed to read Feishu response");
            DeliveryError::transport(e.to_string())
        })?;

        let result = interpret_response(status, response_body);
        match &result {
            Ok(_) => info!("Successfully sent message to Feishu"),
            Err(e) => error!(status = %status, error = %e, "Feishu delivery failed"),
        }
        result
    }

    fn name(&self) -> &str {
        "feishu"
    }
}

/// Classify a Feishu bot response
///
/// Only a 200 whose JSON body carries `"code": 0` counts as delivered.
pub fn interpret_response(status: u16, body: String) -> Result<Delivered, DeliveryError> {
    if status != 200 {
        return Err(DeliveryError::http(status, body));
    }

    let code = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| json.get("code").and_then(serde_json::Value::as_i64));

    match code {
        Some(0) => Ok(Delivered {
            status_code: status,
            response_body: body,
        }),
        _ => Err(DeliveryError::RemoteRejected(body)),
    }
}
