//! PayloadNormalizer - envelope unwrapping and event filtering
//!
//! Sentry posts issues in several shapes: an integration envelope
//! (`{"action", "data": {"error" | "issue" | ...}}`) or a bare issue from the
//! legacy webhook plugin. The normalizer finds the issue document inside
//! whichever shape arrives and decides whether it should be forwarded.

use serde_json::Value;
use tracing::{debug, info};

use crate::domain::{IgnoreList, Rejected};
use crate::extract::{describe_project, display, resolve};

/// Action label assigned to bare issue payloads
pub const DIRECT_ACTION: &str = "direct";
/// The only envelope action that produces a notification
pub const CREATED_ACTION: &str = "created";

/// Issue document unwrapped from an inbound event
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEvent {
    pub issue: Value,
    pub action: String,
}

#[derive(Debug, Clone, Default)]
pub struct PayloadNormalizer {
    ignore_list: IgnoreList,
}

impl PayloadNormalizer {
    pub fn new(ignore_list: IgnoreList) -> Self {
        Self { ignore_list }
    }

    pub fn ignore_list(&self) -> &IgnoreList {
        &self.ignore_list
    }

    /// Unwrap the event and apply the action and ignore-list filters
    pub fn normalize(&self, raw: &Value) -> Result<NormalizedEvent, Rejected> {
        let event = unwrap_envelope(raw)?;

        if let Some(project) = resolve(&event.issue, &["project"]) {
            if self.ignore_list.matches(project) {
                let project = describe_project(project);
                info!(project = %project, "Ignoring project in ignore list");
                return Err(Rejected::Ignored {
                    project,
                    action: event.action,
                });
            }
        }

        Ok(event)
    }
}

/// Locate the canonical issue document
///
/// An envelope with `data` yields `data.error` when present, else `data`, and
/// is rejected unless its action is "created". A bare document needs an `id`
/// plus a `message` or `title`. Anything else is an invalid format.
pub fn unwrap_envelope(raw: &Value) -> Result<NormalizedEvent, Rejected> {
    let Some(root) = raw.as_object() else {
        return Err(Rejected::InvalidFormat);
    };

    if let Some(data) = root.get("data") {
        let issue = data
            .get("error")
            .filter(|error| !error.is_null())
            .unwrap_or(data)
            .clone();
        let action = root
            .get("action")
            .filter(|action| !action.is_null())
            .map(display)
            .unwrap_or_else(|| "unknown".to_string());

        if action != CREATED_ACTION {
            info!(action = %action, "Ignoring non-created action");
            return Err(Rejected::IgnoredAction(action));
        }

        debug!(action = %action, "Unwrapped envelope payload");
        return Ok(NormalizedEvent { issue, action });
    }

    if root.contains_key("id") && (root.contains_key("message") || root.contains_key("title")) {
        debug!("Processing direct issue data");
        return Ok(NormalizedEvent {
            issue: raw.clone(),
            action: DIRECT_ACTION.to_string(),
        });
    }

    let keys: Vec<&str> = root.keys().map(String::as_str).collect();
    info!(keys = ?keys, "Invalid webhook data format");
    Err(Rejected::InvalidFormat)
}
