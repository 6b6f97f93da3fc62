//! Relay Application Service (Use Case)
//!
//! Orchestrates one inbound event end to end: normalize, render, deliver.

use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use sentry_feishu::{
    CardNotifier, CardRenderer, Delivered, DeliveryError, PayloadNormalizer, Rejected,
};

/// What happened to an event that was not an error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    Sent { action: String },
    Ignored { message: String, action: String },
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid webhook data format")]
    InvalidFormat,

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Application service for relaying issues
pub struct RelayService<N: CardNotifier + ?Sized> {
    normalizer: PayloadNormalizer,
    renderer: CardRenderer,
    notifier: Arc<N>,
    debug_mode: bool,
}

impl<N: CardNotifier + ?Sized> RelayService<N> {
    pub fn new(normalizer: PayloadNormalizer, renderer: CardRenderer, notifier: Arc<N>) -> Self {
        Self {
            normalizer,
            renderer,
            notifier,
            debug_mode: false,
        }
    }

    /// Log every rendered card at debug level
    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    /// Process one raw webhook body
    pub async fn relay(&self, raw: &Value) -> Result<RelayOutcome, RelayError> {
        let event = match self.normalizer.normalize(raw) {
            Ok(event) => event,
            Err(rejected) => {
                let message = rejected.to_string();
                return match rejected {
                    Rejected::InvalidFormat => Err(RelayError::InvalidFormat),
                    Rejected::IgnoredAction(action) | Rejected::Ignored { action, .. } => {
                        Ok(RelayOutcome::Ignored { message, action })
                    }
                };
            }
        };

        info!(action = %event.action, "Processing issue");
        self.send_issue(&event.issue).await?;
        Ok(RelayOutcome::Sent {
            action: event.action,
        })
    }

    /// Render an issue document and deliver it once
    pub async fn send_issue(&self, issue: &Value) -> Result<Delivered, DeliveryError> {
        let card = self.renderer.render(issue);

        if self.debug_mode {
            if let Ok(pretty) = serde_json::to_string_pretty(&card) {
                debug!(card = %pretty, "Built card");
            }
        }

        let delivered = self.notifier.deliver(&card).await?;
        debug!(
            notifier = %self.notifier.name(),
            status = %delivered.status_code,
            "Card delivered"
        );
        Ok(delivered)
    }
}
