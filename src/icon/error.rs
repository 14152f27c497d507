//! Error types for icon generation.

use thiserror::Error;

/// Failure modes of the icon renderer.
///
/// The validation variants are client input errors and surface as 400
/// responses; `MissingTemplateSlot` means the template resource itself is
/// unusable and surfaces as 500. Every failure is detected before any
/// output is produced, so a partial SVG is never emitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IconError {
    #[error("Extension parameter (ext or extension) is required")]
    MissingExtension,

    #[error("Invalid file extension. Only alphanumeric characters allowed, max 10 characters.")]
    InvalidExtension,

    #[error("Invalid textColor. Must be a hex color (e.g., #0078d4)")]
    InvalidTextColor,

    #[error("Invalid fontSize. Must be a number between 10 and 200")]
    InvalidFontSize,

    #[error("Invalid bgColor. Must be a hex color (e.g., #f44336)")]
    InvalidBackgroundColor,

    #[error("SVG template is missing the {slot} slot")]
    MissingTemplateSlot { slot: &'static str },
}

impl IconError {
    /// Whether the failure was caused by client input rather than the
    /// service's own resources.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, IconError::MissingTemplateSlot { .. })
    }
}
