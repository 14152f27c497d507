//! SVG file icon generation.
//!
//! The reproducible core of the service: a deterministic palette selector
//! and a renderer that validates request parameters and substitutes them
//! into a fixed SVG skeleton. Everything here is pure and per-request;
//! the only process-wide state is the read-only template text.

mod error;
mod palette;
mod render;

pub use error::IconError;
pub use palette::{stable_index, PALETTE};
pub use render::{IconParams, IconRenderer, DEFAULT_TEMPLATE};
