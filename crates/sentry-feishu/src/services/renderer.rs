//! CardRenderer - issue document to Feishu card
//!
//! Pure transformation apart from the timestamp, which comes from an
//! injectable clock.

use chrono::{Local, NaiveDateTime};
use serde_json::Value;

use crate::domain::{
    CardConfig, CardElement, CardHeader, CardText, ChatCard, NormalizedFields, Severity,
    DEFAULT_LEVEL, NO_MESSAGE, UNKNOWN_ISSUE,
};
use crate::extract::{build_location, resolve_environment, resolve_project_name, resolve_text};

const TITLE_PATHS: &[&str] = &[
    "title",
    "metadata.value",
    "metadata.type",
    "exception.values.0.type",
    "exception.values.0.value",
];
const URL_PATHS: &[&str] = &["web_url", "issue_url", "url"];
const LEVEL_PATHS: &[&str] = &["level", "metadata.level", "tags.level"];
const MESSAGE_PATHS: &[&str] = &[
    "message",
    "metadata.value",
    "exception.values.0.value",
    "title",
];

/// Messages longer than this are cut and suffixed with an ellipsis
pub const MAX_MESSAGE_CHARS: usize = 300;
const TRUNCATED_MESSAGE_CHARS: usize = MAX_MESSAGE_CHARS - 3;

pub const CARD_TITLE: &str = "Sentry Issue Alert";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy)]
pub struct CardRenderer {
    clock: fn() -> NaiveDateTime,
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CardRenderer {
    /// Renderer stamping cards with the local wall clock
    pub fn new() -> Self {
        Self::with_clock(|| Local::now().naive_local())
    }

    pub fn with_clock(clock: fn() -> NaiveDateTime) -> Self {
        Self { clock }
    }

    /// Resolve the displayed fields of an issue document
    pub fn extract(doc: &Value) -> NormalizedFields {
        let message = resolve_text(doc, MESSAGE_PATHS).unwrap_or_else(|| NO_MESSAGE.to_string());

        NormalizedFields {
            title: resolve_text(doc, TITLE_PATHS).unwrap_or_else(|| UNKNOWN_ISSUE.to_string()),
            url: resolve_text(doc, URL_PATHS).unwrap_or_default(),
            project_name: resolve_project_name(doc),
            environment: resolve_environment(doc),
            level: resolve_text(doc, LEVEL_PATHS).unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
            location: build_location(doc),
            message: truncate_message(message),
        }
    }

    pub fn render(&self, doc: &Value) -> ChatCard {
        self.build_card(&Self::extract(doc))
    }

    /// Assemble the card: summary, title and location, divider, optional
    /// details, optional link button, and a trailing timestamp note
    pub fn build_card(&self, fields: &NormalizedFields) -> ChatCard {
        let severity = Severity::parse(&fields.level);

        let mut elements = vec![
            CardElement::markdown(format!(
                "**Project**: {}\n**Environment**: {}\n**Level**: {}",
                fields.project_name,
                fields.environment,
                severity.label()
            )),
            CardElement::markdown(format!(
                "**Title**: {}\n**Location**: {}",
                fields.title, fields.location
            )),
            CardElement::Hr,
        ];

        if fields.has_message() {
            elements.push(CardElement::markdown(format!(
                "**Details**: {}",
                fields.message
            )));
        }

        if fields.has_link() {
            elements.push(CardElement::link_button("View details", fields.url.clone()));
        }

        let now = (self.clock)();
        elements.push(CardElement::note(format!(
            "Time: {}",
            now.format(TIMESTAMP_FORMAT)
        )));

        ChatCard {
            config: CardConfig::default(),
            header: CardHeader {
                title: CardText::plain(format!("{} {}", severity.emoji(), CARD_TITLE)),
                template: severity.template(),
            },
            elements,
        }
    }
}

/// Cut messages over the limit to their first 297 characters plus "..."
pub fn truncate_message(message: String) -> String {
    if message.chars().count() <= MAX_MESSAGE_CHARS {
        return message;
    }
    let mut truncated: String = message.chars().take(TRUNCATED_MESSAGE_CHARS).collect();
    truncated.push_str("...");
    truncated
}
