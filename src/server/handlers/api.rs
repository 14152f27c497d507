//! Service metadata handlers (health check and JSON API docs).

use axum::response::IntoResponse;

/// Health check endpoint for container orchestration.
pub async fn health() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "status": "OK",
        "message": "File Icon Generation server is running",
        "endpoints": ["/file-icon", "/file-icon/:extension", "/health", "/api/docs"],
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// API documentation endpoint. Presentational only; the behavioral
/// contract lives in the renderer.
pub async fn api_docs() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "title": "File Icon Generation API",
        "description": "Generate dynamic SVG file icons with custom extensions and styling options",
        "endpoints": {
            "GET /file-icon": {
                "description": "Generate a file icon SVG with optional styling parameters",
                "parameters": {
                    "ext": "File extension (e.g., png) - required",
                    "extension": "File extension (e.g., jpg) - alias for ext",
                    "textColor": "Text color in hex format (e.g., 0078d4) - optional",
                    "fontSize": "Font size in pixels (10-200) - optional",
                    "bgColor": "Background color in hex format (e.g., f44336) - optional"
                },
                "example": "/file-icon?ext=png&textColor=0078d4&fontSize=28&bgColor=f44336"
            },
            "GET /file-icon/:extension": {
                "description": "Path-parameter variant of /file-icon",
                "example": "/file-icon/js"
            },
            "GET /health": {
                "description": "Health check endpoint",
                "parameters": {},
                "example": "/health"
            }
        },
        "examples": [
            "GET /file-icon?ext=png",
            "GET /file-icon?ext=js&textColor=f39c12",
            "GET /file-icon?ext=pdf&fontSize=150&bgColor=e74c3c",
            "GET /file-icon?ext=docx&textColor=0078d4&fontSize=28&bgColor=3498db",
            "GET /file-icon?ext=json&textColor=ff6b35&fontSize=24&bgColor=2ecc71"
        ],
        "validation": {
            "ext": "Required. Alphanumeric characters only, max 10 characters",
            "textColor": "Optional. 6 hex digits, leading # optional",
            "fontSize": "Optional. Number between 10 and 200",
            "bgColor": "Optional. 6 hex digits, leading # optional"
        },
        "notes": [
            "All icon endpoints return SVG content with appropriate headers",
            "File extensions are converted to uppercase in the generated icon",
            "Default text color is white (#ffffff)",
            "Default font size is 100px (or 75px for extensions 5+ characters)",
            "Default font family is Fredoka",
            "Default font weight is 500",
            "SVG responses carry a 24h Cache-Control header",
            "Background colors are automatically selected based on extension if not specified"
        ]
    }))
}
