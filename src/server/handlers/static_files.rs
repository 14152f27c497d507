//! Landing page and static asset handlers.

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

use super::super::assets;

/// Landing page describing the API.
pub async fn index_page() -> impl IntoResponse {
    Html(assets::INDEX_HTML)
}

/// Serve CSS.
pub async fn serve_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], assets::CSS)
}
