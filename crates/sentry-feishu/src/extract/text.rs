//! Helpers for reading loosely-typed JSON as display text

use serde_json::Value;

use super::path::resolve;

/// Placeholder the upstream uses for "no value"
pub const UNKNOWN: &str = "Unknown";

/// Whether a value counts as present for fallback purposes
///
/// Null, `false`, zero, empty strings and empty containers do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Render a value as text; strings are unquoted, everything else is JSON
pub fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Resolve candidate paths and return the hit as text, if it is truthy
pub fn resolve_text(doc: &Value, paths: &[&str]) -> Option<String> {
    resolve(doc, paths).filter(|v| is_truthy(v)).map(display)
}

/// Read a truthy field of a mapping as text
pub fn field_text(map: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).filter(|v| is_truthy(v)).map(display)
}

/// Drop empty text and the upstream "Unknown" placeholder
pub fn known(text: Option<String>) -> Option<String> {
    text.filter(|s| !s.is_empty() && s != UNKNOWN)
}
