//! Test doubles shared by route and service tests

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use sentry_feishu::{
    CardNotifier, CardRenderer, ChatCard, Delivered, DeliveryError, IgnoreList,
    PayloadNormalizer,
};

use crate::application::RelayService;
use crate::AppState;

/// Notifier that records cards and answers with a canned result
pub struct RecordingNotifier {
    cards: Mutex<Vec<ChatCard>>,
    result: Result<Delivered, DeliveryError>,
}

impl RecordingNotifier {
    pub fn succeeding() -> Self {
        Self {
            cards: Mutex::new(Vec::new()),
            result: Ok(Delivered {
                status_code: 200,
                response_body: r#"{"code":0,"msg":"success"}"#.to_string(),
            }),
        }
    }

    pub fn failing(error: DeliveryError) -> Self {
        Self {
            cards: Mutex::new(Vec::new()),
            result: Err(error),
        }
    }

    pub fn cards(&self) -> Vec<ChatCard> {
        self.cards.lock().unwrap().clone()
    }
}

#[async_trait]
impl CardNotifier for RecordingNotifier {
    async fn deliver(&self, card: &ChatCard) -> Result<Delivered, DeliveryError> {
        self.cards.lock().unwrap().push(card.clone());
        self.result.clone()
    }

    fn name(&self) -> &str {
        "recording"
    }
}

pub fn test_state(notifier: Arc<RecordingNotifier>, ignore_list: IgnoreList) -> AppState {
    let relay = RelayService::new(
        PayloadNormalizer::new(ignore_list),
        CardRenderer::new(),
        notifier as Arc<dyn CardNotifier>,
    );
    AppState {
        relay: Arc::new(relay),
        debug_mode: false,
    }
}
