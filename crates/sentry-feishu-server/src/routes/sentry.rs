//! Sentry Webhook Route
//!
//! Receives Sentry issue webhooks and forwards them to Feishu.

use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::application::RelayError;
use crate::error::ApiError;
use crate::models::{ErrorResponse, WebhookResponse};
use crate::AppState;

/// Receive a Sentry webhook
#[utoipa::path(
    post,
    path = "/webhook/sentry",
    responses(
        (status = 200, description = "Notification sent or event ignored", body = WebhookResponse),
        (status = 400, description = "Malformed JSON or unrecognized payload shape", body = ErrorResponse),
        (status = 500, description = "Delivery to Feishu failed", body = ErrorResponse)
    ),
    tag = "Webhook"
)]
pub async fn receive_sentry_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<WebhookResponse>, ApiError> {
    if state.debug_mode {
        debug!(body = %String::from_utf8_lossy(&body), "Received webhook body");
    }

    let data: Value = serde_json::from_slice(&body).map_err(|e| {
        error!(error = %e, "Invalid JSON in request body");
        ApiError::bad_request("Invalid JSON")
    })?;

    if let Some(root) = data.as_object() {
        let keys: Vec<&str> = root.keys().map(String::as_str).collect();
        info!(keys = ?keys, "Received webhook");
    }

    match state.relay.relay(&data).await {
        Ok(outcome) => Ok(Json(WebhookResponse::from(outcome))),
        Err(RelayError::InvalidFormat) => Err(ApiError::bad_request(
            "Invalid webhook data format",
        )),
        Err(RelayError::Delivery(e)) => {
            error!(error = %e, "Failed to send to Feishu");
            Err(ApiError::internal("Failed to send to Feishu"))
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/webhook/sentry", post(receive_sentry_webhook))
}

#[cfg(test)]
mod tests {
    use crate::testing::{test_state, RecordingNotifier};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use sentry_feishu::{
        CardElement, DeliveryError, HeaderTemplate, IgnoreList, ProjectRef,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn post_webhook(notifier: Arc<RecordingNotifier>, body: String) -> (StatusCode, Value) {
        let ignore_list = IgnoreList::new(vec![
            ProjectRef::IntId(42),
            ProjectRef::NameId("my-project".into()),
        ]);
        let app = crate::app(test_state(notifier, ignore_list));

        let request = Request::builder()
            .method("POST")
            .uri("/webhook/sentry")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_direct_fatal_issue() {
        let notifier = Arc::new(RecordingNotifier::succeeding());
        let body = json!({
            "id": "1",
            "title": "X",
            "level": "fatal",
            "message": "boom",
            "url": "https://e.io/1"
        });

        let (status, response) = post_webhook(notifier.clone(), body.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            response,
            json!({
                "status": "success",
                "message": "Notification sent to Feishu",
                "action": "direct"
            })
        );

        let cards = notifier.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].header.title.content, "🔴 Sentry Issue Alert");
        assert_eq!(cards[0].header.template, HeaderTemplate::Red);
        assert!(cards[0].elements.iter().any(|e| matches!(
            e,
            CardElement::Action { actions } if !actions.is_empty()
        )));
    }

    #[tokio::test]
    async fn test_created_envelope() {
        let notifier = Arc::new(RecordingNotifier::succeeding());
        let body = json!({
            "action": "created",
            "data": {
                "issue": {
                    "title": "TypeError: Cannot read property 'user' of undefined",
                    "url": "https://sentry.example.com/organizations/my-org/issues/12345/",
                    "project": {"name": "Production API"},
                    "tags": {"environment": "production"},
                    "level": "error",
                    "culprit": "api/handlers/user.js in getUserInfo"
                }
            }
        });

        let (status, response) = post_webhook(notifier.clone(), body.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["status"], "success");
        assert_eq!(response["action"], "created");
        assert_eq!(notifier.cards().len(), 1);
    }

    #[tokio::test]
    async fn test_resolved_action_is_ignored() {
        let notifier = Arc::new(RecordingNotifier::succeeding());
        let body = json!({"data": {"issue": {"title": "X"}}, "action": "resolved"});

        let (status, response) = post_webhook(notifier.clone(), body.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            response,
            json!({
                "status": "ignored",
                "message": "Action resolved ignored",
                "action": "resolved"
            })
        );
        assert!(notifier.cards().is_empty());
    }

    #[tokio::test]
    async fn test_ignored_project() {
        let notifier = Arc::new(RecordingNotifier::succeeding());
        let body = json!({"id": "18", "message": "m", "project": "my-project"});

        let (status, response) = post_webhook(notifier.clone(), body.to_string()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response["status"], "ignored");
        assert_eq!(response["message"], "Project my-project is in ignore list");
        assert!(notifier.cards().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let notifier = Arc::new(RecordingNotifier::succeeding());
        let (status, response) = post_webhook(notifier, "{not json".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, json!({"detail": "Invalid JSON"}));
    }

    #[tokio::test]
    async fn test_unrecognized_shape() {
        let notifier = Arc::new(RecordingNotifier::succeeding());
        let body = json!({"title": "missing id"});
        let (status, response) = post_webhook(notifier, body.to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, json!({"detail": "Invalid webhook data format"}));
    }

    #[tokio::test]
    async fn test_delivery_failure() {
        let notifier = Arc::new(RecordingNotifier::failing(DeliveryError::http(
            503,
            "unavailable",
        )));
        let body = json!({"id": "1", "title": "X"});
        let (status, response) = post_webhook(notifier, body.to_string()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response, json!({"detail": "Failed to send to Feishu"}));
    }
}
