//! Project resolver

use serde_json::Value;

use super::path::resolve;
use super::text::{display, field_text};

pub const UNKNOWN_PROJECT: &str = "Unknown Project";

/// Display name of the issue's project
///
/// A mapping yields its `name`, else its `slug`; a string is used as-is; an
/// integer ID is shown as `Project-{id}`.
pub fn resolve_project_name(doc: &Value) -> String {
    match resolve(doc, &["project"]) {
        Some(Value::Object(map)) => field_text(map, "name")
            .or_else(|| field_text(map, "slug"))
            .unwrap_or_else(|| UNKNOWN_PROJECT.to_string()),
        Some(Value::String(name)) if !name.is_empty() => name.clone(),
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => format!("Project-{n}"),
        _ => UNKNOWN_PROJECT.to_string(),
    }
}

/// Describe a `project` value for log lines and ignore reasons
pub fn describe_project(project: &Value) -> String {
    match project {
        Value::Object(map) => {
            let id = map.get("id").map(display).unwrap_or_else(|| "None".to_string());
            let name = field_text(map, "name")
                .or_else(|| field_text(map, "slug"))
                .unwrap_or_else(|| "Unknown".to_string());
            format!("ID: {id}, Name: {name}")
        }
        other => display(other),
    }
}
