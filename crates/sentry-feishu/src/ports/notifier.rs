//! Card Delivery Port
//!
//! Abstract interface for posting a rendered card to a chat webhook.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{ChatCard, DeliveryError};

/// Outcome of a successful delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivered {
    pub status_code: u16,
    pub response_body: String,
}

/// Card delivery interface
///
/// Implementations make exactly one attempt per call; there is no retry.
///
/// # Example
///
/// ```rust,ignore
/// use sentry_feishu::ports::CardNotifier;
///
/// struct FeishuNotifier { /* reqwest client */ }
///
/// #[async_trait]
/// impl CardNotifier for FeishuNotifier {
///     async fn deliver(&self, card: &ChatCard) -> Result<Delivered, DeliveryError> {
///         // POST {"msg_type": "interactive", "card": card}
///     }
///
///     fn name(&self) -> &str { "feishu" }
/// }
/// ```
#[async_trait]
pub trait CardNotifier: Send + Sync {
    /// Post the card to the configured destination
    ///
    /// Fails with `Misconfigured` before any I/O when the destination is not
    /// an http(s) URL.
    async fn deliver(&self, card: &ChatCard) -> Result<Delivered, DeliveryError>;

    /// Destination name for logs
    fn name(&self) -> &str;
}

/// Check that a webhook destination is an absolute http(s) URL
pub fn validate_webhook_url(url: &str) -> Result<(), DeliveryError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(DeliveryError::Misconfigured(format!(
            "invalid webhook URL: '{url}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_webhook_url() {
        assert!(validate_webhook_url("https://open.feishu.cn/open-apis/bot/v2/hook/x").is_ok());
        assert!(validate_webhook_url("http://localhost:9000/hook").is_ok());
        assert!(matches!(
            validate_webhook_url(""),
            Err(DeliveryError::Misconfigured(_))
        ));
        assert!(matches!(
            validate_webhook_url("open.feishu.cn/hook"),
            Err(DeliveryError::Misconfigured(_))
        ));
    }
}
