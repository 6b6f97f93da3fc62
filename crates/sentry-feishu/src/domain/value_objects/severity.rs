//! Severity - issue level as reported upstream

use serde::{Deserialize, Serialize};

/// Issue severity, parsed case-insensitively from the payload's level text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Fatal,
    Error,
    Warning,
    Info,
    Debug,
    /// Any level the relay has no emoji for; keeps the original text
    Other(String),
}

/// Feishu card header colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderTemplate {
    Red,
    Orange,
    Blue,
}

impl Severity {
    pub fn parse(level: &str) -> Self {
        match level.to_lowercase().as_str() {
            "fatal" => Self::Fatal,
            "error" => Self::Error,
            "warning" => Self::Warning,
            "info" => Self::Info,
            "debug" => Self::Debug,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Fatal => "🔴",
            Self::Error => "🟠",
            Self::Warning => "🟡",
            Self::Info => "🔵",
            Self::Debug => "⚪",
            Self::Other(_) => "⚫",
        }
    }

    pub fn template(&self) -> HeaderTemplate {
        match self {
            Self::Fatal | Self::Error => HeaderTemplate::Red,
            Self::Warning => HeaderTemplate::Orange,
            _ => HeaderTemplate::Blue,
        }
    }

    /// Upper-cased label shown in the card body
    pub fn label(&self) -> String {
        match self {
            Self::Fatal => "FATAL".to_string(),
            Self::Error => "ERROR".to_string(),
            Self::Warning => "WARNING".to_string(),
            Self::Info => "INFO".to_string(),
            Self::Debug => "DEBUG".to_string(),
            Self::Other(s) => s.to_uppercase(),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fatal => write!(f, "fatal"),
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Other(s) => write!(f, "{}", s),
        }
    }
}
