//! Relay API Client

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;

/// API client for a running relay
pub struct RelayClient {
    client: Client,
    base_url: String,
}

/// Status and body of one relay answer
#[derive(Debug)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl RelayResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl RelayClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<RelayResponse> {
        let url = format!("{}/health", self.base_url);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to connect to relay")?;

        Self::into_relay_response(resp).await
    }

    /// Post a webhook payload as Sentry would
    pub async fn send_webhook(&self, payload: &Value) -> Result<RelayResponse> {
        let url = format!("{}/webhook/sentry", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .context("Failed to connect to relay")?;

        Self::into_relay_response(resp).await
    }

    /// Ask the relay to send its synthetic test card
    pub async fn test_feishu(&self) -> Result<RelayResponse> {
        let url = format!("{}/test/feishu", self.base_url);
        let resp = self
            .client
            .post(&url)
            .send()
            .await
            .context("Failed to connect to relay")?;

        Self::into_relay_response(resp).await
    }

    async fn into_relay_response(resp: reqwest::Response) -> Result<RelayResponse> {
        let status = resp.status();
        let text = resp.text().await.context("Failed to read response")?;
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        Ok(RelayResponse { status, body })
    }
}
