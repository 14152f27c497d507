//! Input validation and SVG template substitution.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::error::IconError;
use super::palette::{stable_index, PALETTE};

/// SVG skeleton shipped with the binary. An alternate template can be
/// supplied at startup as long as it carries the same four slots.
pub const DEFAULT_TEMPLATE: &str = include_str!("file-icon-template.svg");

/// Substitution slots every template must carry.
const SLOTS: [&str; 4] = ["{{ext}}", "{{color}}", "{{bgColor}}", "{{fontSize}}"];

/// Accepted font size range, in px.
const MIN_FONT_SIZE: f64 = 10.0;
const MAX_FONT_SIZE: f64 = 200.0;

/// Default font size, and the reduced size used once the extension label
/// reaches 5 characters.
const DEFAULT_FONT_SIZE: &str = "100";
const LONG_EXT_FONT_SIZE: &str = "75";

/// Default text color when the caller does not pick one.
const DEFAULT_TEXT_COLOR: &str = "#ffffff";

static EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{1,10}$").unwrap());

/// 6 hex digits with an optional leading `#`. Output is always normalized
/// to the `#`-prefixed form.
static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?[0-9A-Fa-f]{6}$").unwrap());

/// Query parameters for icon generation, as received from the HTTP layer.
#[derive(Debug, Default, Deserialize)]
pub struct IconParams {
    pub ext: Option<String>,
    /// Alias for `ext`; `ext` wins when both are present.
    pub extension: Option<String>,
    #[serde(rename = "textColor")]
    pub text_color: Option<String>,
    #[serde(rename = "fontSize")]
    pub font_size: Option<String>,
    #[serde(rename = "bgColor")]
    pub bg_color: Option<String>,
}

impl IconParams {
    /// The extension the request names, from either spelling. Empty values
    /// count as absent, matching the wire behavior of `ext || extension`.
    pub fn requested_extension(&self) -> Option<&str> {
        provided(&self.ext).or_else(|| provided(&self.extension))
    }
}

/// An optional parameter, with empty strings treated as not provided.
fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Renders file-type icons by substituting resolved values into an SVG
/// template. Construction validates the template once; after that the
/// renderer is read-only and safe to share across any number of
/// concurrent requests.
#[derive(Debug)]
pub struct IconRenderer {
    template: String,
}

impl IconRenderer {
    /// Build a renderer, checking that every substitution slot is present.
    pub fn from_template(template: impl Into<String>) -> Result<Self, IconError> {
        let template = template.into();
        for slot in SLOTS {
            if !template.contains(slot) {
                return Err(IconError::MissingTemplateSlot { slot });
            }
        }
        Ok(Self { template })
    }

    /// Validate `params` and produce the icon SVG text.
    ///
    /// Validation runs in a fixed order and fails fast; nothing is
    /// substituted until every field has passed. The extension is hashed
    /// as received and upper-cased for display only.
    pub fn render(&self, params: &IconParams) -> Result<String, IconError> {
        let ext = params
            .requested_extension()
            .ok_or(IconError::MissingExtension)?;
        if !EXTENSION_RE.is_match(ext) {
            return Err(IconError::InvalidExtension);
        }
        let text_color_param = provided(&params.text_color);
        let font_size_param = provided(&params.font_size);
        let bg_color_param = provided(&params.bg_color);

        if let Some(color) = text_color_param {
            if !HEX_COLOR_RE.is_match(color) {
                return Err(IconError::InvalidTextColor);
            }
        }
        if let Some(size) = font_size_param {
            let in_range = size
                .parse::<f64>()
                .map(|n| (MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&n))
                .unwrap_or(false);
            if !in_range {
                return Err(IconError::InvalidFontSize);
            }
        }
        if let Some(color) = bg_color_param {
            if !HEX_COLOR_RE.is_match(color) {
                return Err(IconError::InvalidBackgroundColor);
            }
        }

        let font_size = match font_size_param {
            Some(size) => size,
            None if ext.len() >= 5 => LONG_EXT_FONT_SIZE,
            None => DEFAULT_FONT_SIZE,
        };

        let text_color = match text_color_param {
            Some(color) => normalize_hex(color),
            None => DEFAULT_TEXT_COLOR.to_string(),
        };

        let bg_color = match bg_color_param {
            Some(color) => normalize_hex(color),
            None => {
                let index = stable_index(ext, PALETTE.len());
                tracing::debug!(extension = ext, index, "stable palette index");
                PALETTE[index].to_string()
            }
        };

        Ok(self
            .template
            .replacen("{{ext}}", &ext.to_uppercase(), 1)
            .replacen("{{color}}", &text_color, 1)
            .replacen("{{bgColor}}", &bg_color, 1)
            .replacen("{{fontSize}}", font_size, 1))
    }
}

/// Ensure a leading `#` on an already-validated hex color.
fn normalize_hex(color: &str) -> String {
    if color.starts_with('#') {
        color.to_string()
    } else {
        format!("#{color}")
    }
}
