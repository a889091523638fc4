//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod documents;
pub mod exports;
pub mod health;
pub mod sessions;
pub mod tables;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(sessions::routes())
        .merge(documents::routes())
        .merge(tables::routes())
        .merge(exports::routes())
}
