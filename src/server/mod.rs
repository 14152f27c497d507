//! Web server exposing the icon generation API.
//!
//! Provides the HTTP surface around the pure icon renderer:
//! - `/file-icon` (query params) and `/file-icon/:extension`
//! - `/health` liveness check and `/api/docs` JSON documentation
//! - A human-facing landing page with embedded static assets

mod assets;
mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::icon::IconRenderer;

/// Shared state for the web server. The renderer is read-only after
/// startup, so handlers share it freely without coordination.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<IconRenderer>,
}

impl AppState {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let template = settings.load_template()?;
        let renderer = IconRenderer::from_template(template)?;

        Ok(Self {
            renderer: Arc::new(renderer),
        })
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings)?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::icon::{DEFAULT_TEMPLATE, PALETTE};

    fn setup_test_app() -> axum::Router {
        let state = AppState {
            renderer: Arc::new(IconRenderer::from_template(DEFAULT_TEMPLATE).unwrap()),
        };
        create_router(state)
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_file_icon_defaults() {
        let (status, headers, body) = get(setup_test_app(), "/file-icon?ext=png").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers.get("content-type").unwrap().to_str().unwrap(),
            "image/svg+xml"
        );
        assert_eq!(
            headers.get("cache-control").unwrap().to_str().unwrap(),
            "public, max-age=86400"
        );
        assert_eq!(
            headers
                .get("content-disposition")
                .unwrap()
                .to_str()
                .unwrap(),
            "inline; filename=\"png.svg\""
        );
        assert!(body.contains("PNG"));
        assert!(body.contains("#ffffff"));
        // png hashes to index 1 in the fixed palette
        assert!(body.contains(PALETTE[1]));
    }

    #[tokio::test]
    async fn test_file_icon_explicit_styling() {
        let (status, _, body) = get(
            setup_test_app(),
            "/file-icon?ext=json&textColor=ff6b35&bgColor=2ecc71&fontSize=24",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("#ff6b35"));
        assert!(body.contains("#2ecc71"));
        assert!(body.contains("font-size=\"24\""));
        assert!(body.contains("JSON"));
    }

    #[tokio::test]
    async fn test_file_icon_extension_alias() {
        let (status, _, body) = get(setup_test_app(), "/file-icon?extension=jpg").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("JPG"));
    }

    #[tokio::test]
    async fn test_file_icon_by_path() {
        let (status, headers, body) = get(setup_test_app(), "/file-icon/rs").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            headers.get("content-type").unwrap().to_str().unwrap(),
            "image/svg+xml"
        );
        assert!(body.contains("RS"));
    }

    #[tokio::test]
    async fn test_file_icon_by_path_with_styling() {
        let (status, _, body) = get(setup_test_app(), "/file-icon/toml?fontSize=32").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("font-size=\"32\""));
        assert!(body.contains("TOML"));
    }

    #[tokio::test]
    async fn test_file_icon_missing_extension() {
        let (status, _, body) = get(setup_test_app(), "/file-icon").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("required"));
    }

    #[tokio::test]
    async fn test_file_icon_extension_boundary() {
        let (status, _, _) = get(setup_test_app(), "/file-icon?ext=abcdefghij").await;
        assert_eq!(status, StatusCode::OK);

        let (status, _, body) = get(setup_test_app(), "/file-icon?ext=abcdefghijk").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json["error"]
            .as_str()
            .unwrap()
            .contains("Invalid file extension"));
    }

    #[tokio::test]
    async fn test_file_icon_invalid_text_color() {
        let (status, _, body) = get(setup_test_app(), "/file-icon?ext=png&textColor=zzzzzz").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("textColor"));
    }

    #[tokio::test]
    async fn test_file_icon_font_size_bounds() {
        for uri in ["/file-icon?ext=png&fontSize=9", "/file-icon?ext=png&fontSize=201"] {
            let (status, _, body) = get(setup_test_app(), uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            let json: serde_json::Value = serde_json::from_str(&body).unwrap();
            assert!(json["error"].as_str().unwrap().contains("fontSize"));
        }

        for uri in ["/file-icon?ext=png&fontSize=10", "/file-icon?ext=png&fontSize=200"] {
            let (status, _, _) = get(setup_test_app(), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_file_icon_invalid_bg_color() {
        let (status, _, body) = get(setup_test_app(), "/file-icon?ext=png&bgColor=12345").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("bgColor"));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _, body) = get(setup_test_app(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "OK");
        assert!(json["endpoints"].is_array());
    }

    #[tokio::test]
    async fn test_api_docs() {
        let (status, _, body) = get(setup_test_app(), "/api/docs").await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["title"], "File Icon Generation API");
        assert!(json["endpoints"]["GET /file-icon"]["parameters"]["ext"].is_string());
    }

    #[tokio::test]
    async fn test_index_page() {
        let (status, _, body) = get(setup_test_app(), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<!DOCTYPE html>") || body.contains("<html"));
        assert!(body.contains("Icon Forge"));
    }

    #[tokio::test]
    async fn test_static_css() {
        let (status, headers, _) = get(setup_test_app(), "/static/style.css").await;

        assert_eq!(status, StatusCode::OK);
        let content_type = headers
            .get("content-type")
            .map(|v| v.to_str().unwrap_or(""));
        assert!(content_type.unwrap_or("").contains("css"));
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _, _) = get(setup_test_app(), "/no-such-route").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
