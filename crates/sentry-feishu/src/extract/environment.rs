//! Environment resolver

use serde_json::Value;

use super::path::resolve;
use super::text::{display, known, resolve_text, UNKNOWN};

/// Resolve the deployment environment, "Unknown" when nothing usable is found
///
/// Tries the `environment` field, then `tags` (mapping or list form), then the
/// dynamic sampling context, then the tags and environment nested under
/// `event` in the legacy plugin payload.
pub fn resolve_environment(doc: &Value) -> String {
    known(resolve_text(doc, &["environment"]))
        .or_else(|| resolve(doc, &["tags"]).and_then(environment_from_tags))
        .or_else(|| known(resolve_text(doc, &["_dsc.environment"])))
        .or_else(|| resolve(doc, &["event.tags"]).and_then(environment_from_tags))
        .or_else(|| known(resolve_text(doc, &["event.environment"])))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Read the environment out of a tag collection
///
/// Accepts `{"environment": "prod"}`, `[{"key": "environment", "value": "prod"}]`,
/// `[{"environment": "prod"}]` and `[["environment", "prod"]]`.
fn environment_from_tags(tags: &Value) -> Option<String> {
    match tags {
        Value::Object(map) => known(map.get("environment").map(display)),
        Value::Array(items) => items.iter().find_map(environment_from_tag),
        _ => None,
    }
}

fn environment_from_tag(tag: &Value) -> Option<String> {
    match tag {
        Value::Object(map) if map.get("key").and_then(Value::as_str) == Some("environment") => {
            known(map.get("value").map(display))
        }
        Value::Object(map) => known(map.get("environment").map(display)),
        Value::Array(pair) if pair.len() == 2 && pair[0].as_str() == Some("environment") => {
            known(Some(display(&pair[1])))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_direct_field_wins() {
        let doc = json!({"environment": "staging", "tags": {"environment": "prod"}});
        assert_eq!(resolve_environment(&doc), "staging");
    }

    #[test]
    fn test_tag_shapes() {
        assert_eq!(
            resolve_environment(&json!({"tags": {"environment": "test"}})),
            "test"
        );
        assert_eq!(
            resolve_environment(&json!({"tags": [
                {"key": "level", "value": "error"},
                {"key": "environment", "value": "production"}
            ]})),
            "production"
        );
        assert_eq!(
            resolve_environment(&json!({"tags": [{"environment": "qa"}]})),
            "qa"
        );
        assert_eq!(
            resolve_environment(&json!({"tags": [["release", "1.0"], ["environment", "dev"]]})),
            "dev"
        );
    }

    #[test]
    fn test_unknown_values_fall_through() {
        let doc = json!({
            "environment": "Unknown",
            "tags": [{"key": "environment", "value": "Unknown"}],
            "_dsc": {"environment": "canary"}
        });
        assert_eq!(resolve_environment(&doc), "canary");
    }

    #[test]
    fn test_legacy_event_tags() {
        let doc = json!({
            "event": {"tags": [{"key": "environment", "value": "production"}]}
        });
        assert_eq!(resolve_environment(&doc), "production");

        let doc = json!({"event": {"environment": "beta"}});
        assert_eq!(resolve_environment(&doc), "beta");
    }

    #[test]
    fn test_defaults_to_unknown() {
        assert_eq!(resolve_environment(&json!({})), "Unknown");
        assert_eq!(resolve_environment(&json!({"tags": "environment"})), "Unknown");
    }
}
