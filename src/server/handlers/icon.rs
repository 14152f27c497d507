//! Icon generation handlers.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::icon::IconParams;

use super::super::AppState;

/// Generate a file icon from query parameters.
pub async fn file_icon(
    State(state): State<AppState>,
    Query(params): Query<IconParams>,
) -> Response {
    render_icon(&state, params)
}

/// Path-parameter variant: `/file-icon/:extension`. Styling overrides are
/// still read from the query string; the path segment wins over any `ext`
/// query parameter.
pub async fn file_icon_by_path(
    State(state): State<AppState>,
    Path(extension): Path<String>,
    Query(mut params): Query<IconParams>,
) -> Response {
    params.ext = Some(extension);
    render_icon(&state, params)
}

fn render_icon(state: &AppState, params: IconParams) -> Response {
    match state.renderer.render(&params) {
        Ok(svg) => {
            // Filename keeps the extension as received, not the display casing
            let filename = params.requested_extension().unwrap_or_default();
            let disposition = format!("inline; filename=\"{}.svg\"", filename);
            (
                [
                    (header::CONTENT_TYPE, "image/svg+xml".to_string()),
                    (header::CACHE_CONTROL, "public, max-age=86400".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                svg,
            )
                .into_response()
        }
        Err(e) if e.is_client_error() => (
            StatusCode::BAD_REQUEST,
            axum::Json(serde_json::json!({ "error": e.to_string() })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("SVG generation error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(serde_json::json!({
                    "error": "Failed to generate file icon",
                    "details": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
