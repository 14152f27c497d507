//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Human-facing landing page
        .route("/", get(handlers::index_page))
        // Icon generation
        .route("/file-icon", get(handlers::file_icon))
        .route("/file-icon/:extension", get(handlers::file_icon_by_path))
        // Service metadata
        .route("/health", get(handlers::health))
        .route("/api/docs", get(handlers::api_docs))
        // Static assets
        .route("/static/style.css", get(handlers::serve_css))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
