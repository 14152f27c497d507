//! Static asset constants (landing page HTML and CSS).

/// Landing page describing the API.
pub const INDEX_HTML: &str = include_str!("index.html");

/// Stylesheet for the landing page.
pub const CSS: &str = include_str!("styles.css");
