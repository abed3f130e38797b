//! Text rendering interface
//!
//! Widgets never rasterize glyphs themselves. They hand a string and a
//! [`GlyphStyle`] to a [`TextRenderer`] and composite the returned [`Image`].

use crate::canvas::Image;
use crate::color::Color;
use crate::error::Result;

/// How a run of text should be rasterized
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphStyle {
    /// Smooth glyph edges; when off, coverage is thresholded
    pub antialias: bool,
    /// Glyph color
    pub color: Color,
    /// Fill behind the glyphs, `None` for transparent
    pub background: Option<Color>,
}

impl GlyphStyle {
    pub fn new(color: Color) -> Self {
        Self {
            antialias: true,
            color,
            background: None,
        }
    }

    pub fn antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    pub fn background(mut self, background: Color) -> Self {
        self.background = Some(background);
        self
    }
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}

/// A font-backed text measurer and rasterizer
pub trait TextRenderer {
    /// Rasterize `text` as a single line
    ///
    /// The image width is the advance width of the run and its height is
    /// [`line_height`](TextRenderer::line_height).
    fn render(&self, text: &str, style: &GlyphStyle) -> Result<Image>;

    /// Height of one line of text in pixels
    fn line_height(&self) -> u32;

    /// Advance width of `text` in pixels
    fn measure(&self, text: &str) -> Result<u32> {
        let image = self.render(text, &GlyphStyle::default())?;
        Ok(image.width())
    }
}
