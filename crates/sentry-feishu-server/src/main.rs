use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod logging;
mod models;
mod routes;
#[cfg(test)]
mod testing;

use adapters::FeishuNotifier;
use application::RelayService;
use config::AppConfig;
use sentry_feishu::{CardNotifier, CardRenderer, PayloadNormalizer};

/// Relay service over the configured notifier
pub type AppRelayService = RelayService<dyn CardNotifier>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<AppRelayService>,
    pub debug_mode: bool,
}

/// Build the router with all routes, docs and layers
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(routes::health::router())
        .merge(routes::sentry::router())
        .merge(routes::feishu::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init(config::debug_mode_from_env());
    let config = AppConfig::from_env()?;

    tracing::info!("🚀 Sentry to Feishu relay initializing...");

    if config.feishu_webhook_url.is_empty() {
        tracing::warn!("⚠️  No FEISHU_WEBHOOK_URL set - deliveries will fail");
    } else if let Err(e) = sentry_feishu::validate_webhook_url(&config.feishu_webhook_url) {
        tracing::warn!("⚠️  {} - deliveries will fail", e);
    }

    if config.ignore_list.is_empty() {
        tracing::info!("No ignored projects configured");
    } else {
        tracing::info!("🙈 Ignored projects: {}", config.ignore_list);
    }

    if config.debug_mode {
        tracing::info!("🐛 Debug mode enabled");
    }

    let notifier: Arc<dyn CardNotifier> = Arc::new(
        FeishuNotifier::new(config.feishu_webhook_url.clone())
            .context("Failed to build Feishu HTTP client")?,
    );

    let relay = RelayService::new(
        PayloadNormalizer::new(config.ignore_list.clone()),
        CardRenderer::new(),
        notifier,
    )
    .with_debug_mode(config.debug_mode);

    let state = AppState {
        relay: Arc::new(relay),
        debug_mode: config.debug_mode,
    };

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Listening on {}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("👋 Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{test_state, RecordingNotifier};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use sentry_feishu::IgnoreList;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn get(uri: &str) -> (StatusCode, Value) {
        let notifier = Arc::new(RecordingNotifier::succeeding());
        let app = app(test_state(notifier, IgnoreList::default()));
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_root() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "Sentry to Feishu Webhook");
        assert_eq!(body["status"], "running");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "healthy"}));
    }

    #[tokio::test]
    async fn test_openapi_lists_routes() {
        let (status, body) = get("/api-docs/openapi.json").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/webhook/sentry"]["post"].is_object());
        assert!(body["paths"]["/test/feishu"]["post"].is_object());
    }
}
