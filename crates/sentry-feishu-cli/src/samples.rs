//! Built-in sample payloads
//!
//! One payload per shape the relay accepts.

use clap::ValueEnum;
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleShape {
    /// Integration-platform envelope with `action: created`
    Envelope,
    /// Legacy webhooks-plugin issue with tags as key/value pairs
    Plugin,
    /// Minimal bare issue
    Direct,
}

pub fn sample_payload(shape: SampleShape) -> Value {
    match shape {
        SampleShape::Envelope => json!({
            "action": "created",
            "data": {
                "issue": {
                    "title": "TypeError: Cannot read property 'user' of undefined",
                    "url": "https://sentry.example.com/organizations/my-org/issues/12345/",
                    "project": {"name": "Production API"},
                    "tags": {"environment": "production"},
                    "level": "error",
                    "culprit": "api/handlers/user.js in getUserInfo",
                    "message": "TypeError: Cannot read property 'user' of undefined\n  at getUserInfo (api/handlers/user.js:45:12)\n  at async handleRequest (api/middleware/auth.js:23:5)"
                }
            }
        }),
        SampleShape::Plugin => json!({
            "id": "18",
            "project": "sample-server-dev",
            "project_name": "sample-server-dev",
            "project_slug": "sample-server-dev",
            "logger": null,
            "level": "error",
            "culprit": "../../sentry/scripts/views.js in poll",
            "message": "This is an example Go exception",
            "url": "https://sentry.example.com/organizations/sentry/issues/18/?referrer=webhooks_plugin",
            "triggering_rules": [""],
            "event": {
                "event_id": "612e5ffe74b9421f8e0f74da884ed301",
                "level": "error",
                "version": "5",
                "tags": [
                    {"key": "environment", "value": "production"}
                ]
            }
        }),
        SampleShape::Direct => json!({
            "id": "1",
            "title": "ZeroDivisionError: division by zero",
            "level": "warning",
            "message": "division by zero",
            "url": "https://sentry.example.com/organizations/my-org/issues/1/"
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentry_feishu::{CardRenderer, IgnoreList, PayloadNormalizer};

    #[test]
    fn test_every_sample_is_accepted() {
        let normalizer = PayloadNormalizer::new(IgnoreList::default());
        for shape in [SampleShape::Envelope, SampleShape::Plugin, SampleShape::Direct] {
            assert!(
                normalizer.normalize(&sample_payload(shape)).is_ok(),
                "{shape:?} rejected"
            );
        }
    }

    #[test]
    fn test_plugin_sample_fields() {
        let normalizer = PayloadNormalizer::new(IgnoreList::default());
        let event = normalizer
            .normalize(&sample_payload(SampleShape::Plugin))
            .unwrap();
        assert_eq!(event.action, "direct");

        let fields = CardRenderer::extract(&event.issue);
        assert_eq!(fields.project_name, "sample-server-dev");
        assert_eq!(fields.environment, "production");
        assert_eq!(fields.location, "../../sentry/scripts/views.js in poll");
    }

    #[test]
    fn test_plugin_sample_respects_ignore_list() {
        let normalizer = PayloadNormalizer::new(IgnoreList::parse("sample-server-dev"));
        let rejected = normalizer
            .normalize(&sample_payload(SampleShape::Plugin))
            .unwrap_err();
        assert!(rejected.is_ignored());
    }
}
