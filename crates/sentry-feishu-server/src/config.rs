//! Environment configuration
//!
//! Read once at startup; the resolved values are shared read-only with
//! every request.

use anyhow::{Context, Result};
use std::env;

use sentry_feishu::IgnoreList;

const FEISHU_WEBHOOK_URL_VAR: &str = "FEISHU_WEBHOOK_URL";
const IGNORE_PROJECT_IDS_VAR: &str = "IGNORE_PROJECT_IDS";
const LEGACY_IGNORE_PROJECT_IDS_VAR: &str = "IGNORE_TO_FEECHU_PROJECT_IDS";
const DEBUG_MODE_VAR: &str = "DEBUG_MODE";
const HOST_VAR: &str = "HOST";
const PORT_VAR: &str = "PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// May be empty or malformed; deliveries then fail as misconfigured
    pub feishu_webhook_url: String,
    pub ignore_list: IgnoreList,
    pub debug_mode: bool,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let feishu_webhook_url = lookup(FEISHU_WEBHOOK_URL_VAR)
            .map(|url| url.trim().to_string())
            .unwrap_or_default();

        let ignore_list = lookup(IGNORE_PROJECT_IDS_VAR)
            .or_else(|| lookup(LEGACY_IGNORE_PROJECT_IDS_VAR))
            .map(|raw| IgnoreList::parse(&raw))
            .unwrap_or_default();

        let host = lookup(HOST_VAR)
            .map(|host| host.trim().to_string())
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT `{raw}` is not a valid port number"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            feishu_webhook_url,
            ignore_list,
            debug_mode: parse_flag(lookup(DEBUG_MODE_VAR)),
            host,
            port,
        })
    }
}

/// Whether verbose logging was requested, read before logging starts
pub fn debug_mode_from_env() -> bool {
    dotenvy::dotenv().ok();
    parse_flag(env::var(DEBUG_MODE_VAR).ok())
}

fn parse_flag(raw: Option<String>) -> bool {
    raw.is_some_and(|value| value.trim().eq_ignore_ascii_case("true"))
}
