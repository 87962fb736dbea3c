//! canvaslift-server: HTTP generation service over the [`canvaslift_core`] pipeline.
//!
//! The service wraps extraction, generation and removal behind a small JSON
//! API so editors and design tools can lift a canvas element without shelling
//! out to the CLI.
//!
//! # Modules
//!
//! - [`api`] — HTTP handlers and error normalization
//! - [`client`] — `reqwest` client for a running service

pub mod api;
pub mod client;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use canvaslift_core::LiftConfig;

/// Axum application state: the project the service generates into.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<LiftConfig>,
}

impl AppContext {
    pub fn new(config: LiftConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}

/// Build the service router with CORS and request tracing.
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(api::api_health))
        .route("/health", get(api::api_health))
        .route("/generate", post(api::api_generate))
        .route("/api/generate-component", post(api::api_generate))
        .route("/api/delete-component", post(api::api_delete))
        .route("/api/extract-component", post(api::api_extract))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
