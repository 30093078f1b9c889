//! Inbound HTTP surface: four read-only query routes under `/api/v1`.
//!
//! Handlers own one request each; dropping a handler future (client went away)
//! drops its in-flight upstream calls and nothing else.

pub mod envelope;
pub mod params;
mod routes;

use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::provider::Provider;

/// Per-request deadline used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared application state, passed to all route handlers via `axum::extract::State`.
#[derive(Debug)]
pub struct AppState {
    pub provider: Provider,
    /// Requests still running after this are answered with 408.
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(provider: Provider) -> Arc<Self> {
        Self::with_request_timeout(provider, DEFAULT_REQUEST_TIMEOUT)
    }

    pub fn with_request_timeout(provider: Provider, request_timeout: Duration) -> Arc<Self> {
        Arc::new(Self {
            provider,
            request_timeout,
        })
    }
}

/// Assemble the full application router.
pub fn router(state: Arc<AppState>) -> Router {
    let timeout = state.request_timeout;
    Router::new()
        .nest("/api/v1", routes::routes())
        .route("/health", get(health))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
