//! ChatCard - Feishu interactive card
//!
//! Typed model of the card schema accepted by Feishu custom bots. Built
//! fresh for every issue and serialized as the request body.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::HeaderTemplate;

/// Body posted to the bot webhook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractiveMessage {
    pub msg_type: String,
    pub card: ChatCard,
}

impl InteractiveMessage {
    pub fn new(card: ChatCard) -> Self {
        Self {
            msg_type: "interactive".to_string(),
            card,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCard {
    pub config: CardConfig,
    pub header: CardHeader,
    pub elements: Vec<CardElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    pub wide_screen_mode: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            wide_screen_mode: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardHeader {
    pub title: CardText,
    pub template: HeaderTemplate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextTag {
    PlainText,
    LarkMd,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardText {
    pub content: String,
    pub tag: TextTag,
}

impl CardText {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tag: TextTag::PlainText,
        }
    }

    pub fn markdown(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tag: TextTag::LarkMd,
        }
    }
}

/// Card body block, discriminated by its `tag` field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum CardElement {
    Div { text: CardText },
    Hr,
    Action { actions: Vec<CardAction> },
    Note { elements: Vec<CardText> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "snake_case")]
pub enum CardAction {
    Button {
        text: CardText,
        #[serde(rename = "type")]
        kind: String,
        url: String,
    },
}

impl CardElement {
    pub fn markdown(content: impl Into<String>) -> Self {
        Self::Div {
            text: CardText::markdown(content),
        }
    }

    pub fn link_button(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Action {
            actions: vec![CardAction::Button {
                text: CardText::plain(label),
                kind: "primary".to_string(),
                url: url.into(),
            }],
        }
    }

    pub fn note(content: impl Into<String>) -> Self {
        Self::Note {
            elements: vec![CardText::plain(content)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_to_feishu_schema() {
        let card = ChatCard {
            config: CardConfig::default(),
            header: CardHeader {
                title: CardText::plain("🔴 Sentry Issue Alert"),
                template: HeaderTemplate::Red,
            },
            elements: vec![
                CardElement::markdown("**Title**: X"),
                CardElement::Hr,
                CardElement::link_button("View details", "https://e.io/1"),
                CardElement::note("Time: 2024-01-02 03:04:05"),
            ],
        };

        let value = serde_json::to_value(InteractiveMessage::new(card)).unwrap();
        assert_eq!(
            value,
            json!({
                "msg_type": "interactive",
                "card": {
                    "config": {"wide_screen_mode": true},
                    "header": {
                        "title": {"content": "🔴 Sentry Issue Alert", "tag": "plain_text"},
                        "template": "red"
                    },
                    "elements": [
                        {"tag": "div", "text": {"content": "**Title**: X", "tag": "lark_md"}},
                        {"tag": "hr"},
                        {"tag": "action", "actions": [{
                            "tag": "button",
                            "text": {"content": "View details", "tag": "plain_text"},
                            "type": "primary",
                            "url": "https://e.io/1"
                        }]},
                        {"tag": "note", "elements": [
                            {"content": "Time: 2024-01-02 03:04:05", "tag": "plain_text"}
                        ]}
                    ]
                }
            })
        );
    }
}
