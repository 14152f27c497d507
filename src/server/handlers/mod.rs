//! HTTP request handlers for the web server.

mod api;
mod icon;
mod static_files;

// Re-export handlers for use by the router
pub use api::{api_docs, health};
pub use icon::{file_icon, file_icon_by_path};
pub use static_files::{index_page, serve_css};
