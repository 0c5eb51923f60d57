//! Axum-based HTTP surface for the recommendation engine.
//!
//! Thin by design: the engine is pure, so the gateway only parses bodies,
//! maps engine errors to 4xx responses, and (when a provider is configured)
//! forwards reports to the briefing layer. Body limits and request timeouts
//! are applied the same way on every route.

mod handlers;

use handlers::{handle_brief, handle_health, handle_recommend};

use crate::config::Config;
use crate::providers::{self, Provider};
use anyhow::Result;
use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

/// Maximum request body size (64KB); a score history feed is far smaller
pub const MAX_BODY_SIZE: usize = 65_536;
/// Overall request deadline, sized to cover the provider call on `/brief`
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Shared state for all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// Injected text-generation collaborator; `None` runs the gateway in
    /// engine-only mode where `/brief` answers 503.
    pub provider: Option<Arc<dyn Provider>>,
    pub model: String,
    pub temperature: f64,
}

/// Body shared by `/recommend` and `/brief`.
#[derive(serde::Deserialize)]
pub struct RecommendBody {
    pub records: Vec<serde_json::Value>,
    pub current_score: f64,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/recommend", post(handle_recommend))
        .route("/brief", post(handle_brief))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .with_state(state)
}

/// Run the HTTP gateway.
pub async fn run_gateway(host: &str, port: u16, config: Config) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    run_gateway_with_listener(host, listener, config).await
}

/// Run the HTTP gateway from a pre-bound listener (port 0 friendly).
pub async fn run_gateway_with_listener(
    host: &str,
    listener: tokio::net::TcpListener,
    config: Config,
) -> Result<()> {
    let actual_port = listener.local_addr()?.port();

    let provider: Option<Arc<dyn Provider>> = match config.default_provider.as_deref() {
        Some(name) => match providers::create_provider(name, config.api_key.as_deref()) {
            Ok(p) => Some(Arc::from(p)),
            Err(e) => {
                tracing::warn!("provider unavailable, /brief disabled: {e}");
                None
            }
        },
        None => None,
    };

    let state = AppState {
        provider,
        model: config
            .default_model
            .unwrap_or_else(|| "gpt-4o-mini".to_string()),
        temperature: config.default_temperature,
    };

    let router = build_router(state);

    tracing::info!("🌐 Gateway listening on {host}:{actual_port}");
    axum::serve(listener, router).await?;
    Ok(())
}
