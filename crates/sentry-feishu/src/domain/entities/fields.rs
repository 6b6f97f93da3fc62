//! NormalizedFields - the human-relevant fields of one issue

use serde::{Deserialize, Serialize};

pub const UNKNOWN_ISSUE: &str = "Unknown Issue";
pub const NO_MESSAGE: &str = "No message provided";
pub const DEFAULT_LEVEL: &str = "error";

/// Fields resolved from a canonical issue document
///
/// Every field always holds text; missing data degrades to a sentinel
/// such as "Unknown Issue" rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedFields {
    pub title: String,
    /// Empty when the issue carries no link
    pub url: String,
    pub project_name: String,
    pub environment: String,
    pub level: String,
    pub location: String,
    /// Already truncated to the card's detail length
    pub message: String,
}

impl NormalizedFields {
    /// True when the url is an absolute http(s) link worth a button
    pub fn has_link(&self) -> bool {
        self.url.starts_with("http://") || self.url.starts_with("https://")
    }

    /// True when the message carries more than the sentinel
    pub fn has_message(&self) -> bool {
        !self.message.is_empty() && self.message != NO_MESSAGE
    }
}
