//! Font-backed text rendering for textbox widgets
//!
//! This crate provides:
//! - Font loading and metrics (TTF/OTF via swash)
//! - Glyph rasterization to coverage masks
//! - [`FontRenderer`], a [`TextRenderer`](textbox_core::TextRenderer) that
//!   lays a string out on one line and returns it as an RGBA image

pub mod font;
pub mod rasterizer;
pub mod renderer;

pub use font::{FontFace, FontMetrics};
pub use rasterizer::{GlyphMask, GlyphRasterizer};
pub use renderer::FontRenderer;
