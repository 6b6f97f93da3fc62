//! Domain Errors
//!
//! Rejections raised while normalizing an inbound event, and failures
//! raised while delivering a rendered card.

use thiserror::Error;

/// Why an inbound event was not turned into a notification
///
/// `IgnoredAction` and `Ignored` are filter outcomes, not failures; only
/// `InvalidFormat` is reported to the sender as a client error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejected {
    #[error("Invalid webhook data format")]
    InvalidFormat,

    #[error("Action {0} ignored")]
    IgnoredAction(String),

    #[error("Project {project} is in ignore list")]
    Ignored { project: String, action: String },
}

impl Rejected {
    /// True for filter outcomes that should be answered with an "ignored" status
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::IgnoredAction(_) | Self::Ignored { .. })
    }
}

/// Outbound delivery failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("Webhook misconfigured: {0}")]
    Misconfigured(String),

    #[error("Remote rejected message: {0}")]
    RemoteRejected(String),

    #[error("{}", transport_message(.status, .detail))]
    Transport { status: Option<u16>, detail: String },
}

impl DeliveryError {
    pub fn transport<T: Into<String>>(detail: T) -> Self {
        Self::Transport {
            status: None,
            detail: detail.into(),
        }
    }

    pub fn http<T: Into<String>>(status: u16, body: T) -> Self {
        Self::Transport {
            status: Some(status),
            detail: body.into(),
        }
    }
}

fn transport_message(status: &Option<u16>, detail: &str) -> String {
    match status {
        Some(code) => format!("HTTP error: {code}, response: {detail}"),
        None => format!("Transport error: {detail}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ignored_classification() {
        assert!(Rejected::IgnoredAction("resolved".into()).is_ignored());
        assert!(Rejected::Ignored {
            project: "42".into(),
            action: "direct".into()
        }
        .is_ignored());
        assert!(!Rejected::InvalidFormat.is_ignored());
    }

    #[test]
    fn test_transport_display() {
        assert_eq!(
            DeliveryError::http(502, "bad gateway").to_string(),
            "HTTP error: 502, response: bad gateway"
        );
        assert_eq!(
            DeliveryError::transport("connection refused").to_string(),
            "Transport error: connection refused"
        );
    }
}
