//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for sessions, uploads, tables, and exports
//! - The shared application state
//! - Error-to-response mapping

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use budgetgen_core::session::SessionStore;
use budgetgen_shared::AppConfig;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// In-memory session registry.
    pub sessions: Arc<SessionStore>,
    /// Loaded application configuration.
    pub config: Arc<AppConfig>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    // The configured file cap plus slack for multipart framing.
    let body_limit = usize::try_from(state.config.upload.max_file_size)
        .unwrap_or(usize::MAX)
        .saturating_add(64 * 1024);

    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
