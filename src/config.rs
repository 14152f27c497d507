//! Configuration management for Icon Forge.
//!
//! Everything the process needs is resolved once at startup: a default
//! port (the `PORT` environment variable, matching the original deploy
//! convention) and an optional path to an alternate SVG template.

use std::path::PathBuf;

use anyhow::Context;

use crate::icon::DEFAULT_TEMPLATE;

/// Port used when neither the bind argument nor `PORT` name one.
pub const DEFAULT_PORT: u16 = 3000;

/// Process-wide settings resolved from CLI arguments and the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Port used when the bind address does not carry one.
    pub default_port: u16,
    /// Alternate SVG template file; the embedded template is used when unset.
    pub template_path: Option<PathBuf>,
}

impl Settings {
    pub fn load(template_path: Option<PathBuf>) -> Self {
        let default_port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            default_port,
            template_path,
        }
    }

    /// Read the SVG template, from the configured file or the embedded
    /// default. Called once before serving traffic; the result is held in
    /// read-only state for the lifetime of the process.
    pub fn load_template(&self) -> anyhow::Result<String> {
        match &self.template_path {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read SVG template from {}", path.display())),
            None => Ok(DEFAULT_TEMPLATE.to_string()),
        }
    }
}
