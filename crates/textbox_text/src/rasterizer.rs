//! Glyph coverage masks from swash
//!
//! Whatever swash hands back (a plain alpha mask, a subpixel mask or a
//! color bitmap strike), every glyph ends up as one coverage byte per pixel.

use swash::scale::image::Content;
use swash::scale::{Render, ScaleContext, Source, StrikeWith};
use swash::zeno::Format;
use textbox_core::Result;

use crate::font::FontFace;

/// Color bitmap strikes first, then outlines
const SOURCES: &[Source] = &[Source::ColorBitmap(StrikeWith::BestFit), Source::Outline];

/// One glyph as an 8-bit coverage mask positioned relative to the pen
#[derive(Debug, Clone, Default)]
pub struct GlyphMask {
    /// Coverage, row-major, `width * height` bytes
    pub coverage: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Offset from the pen position to the left edge
    pub left: i32,
    /// Offset from the baseline up to the top edge
    pub top: i32,
    /// Pen advance in pixels
    pub advance: f32,
}

impl GlyphMask {
    /// Coverage at a mask pixel, 0 outside the mask
    pub fn coverage_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.coverage
            .get(y as usize * self.width as usize + x as usize)
            .copied()
            .unwrap_or(0)
    }
}

/// Reduce swash image data to one coverage byte per pixel
///
/// Color and subpixel images carry four bytes per pixel; color strikes keep
/// their alpha and subpixel masks keep the strongest channel.
pub fn coverage_from_content(content: Content, data: &[u8]) -> Vec<u8> {
    match content {
        Content::Mask => data.to_vec(),
        Content::Color => data.chunks_exact(4).map(|px| px[3]).collect(),
        Content::SubpixelMask => data
            .chunks_exact(4)
            .map(|px| px[0].max(px[1]).max(px[2]))
            .collect(),
    }
}

/// Rasterizes glyphs of any face, reusing swash's scaling caches
pub struct GlyphRasterizer {
    context: ScaleContext,
}

impl GlyphRasterizer {
    pub fn new() -> Self {
        Self {
            context: ScaleContext::new(),
        }
    }

    /// Rasterize `glyph_id` of `face` at `size` pixels per em
    pub fn rasterize(&mut self, face: &FontFace, glyph_id: u16, size: f32) -> Result<GlyphMask> {
        let font = face.as_swash()?;
        let advance = font.glyph_metrics(&[]).scale(size).advance_width(glyph_id);

        let mut scaler = self.context.builder(font).size(size).build();
        let rendered = Render::new(SOURCES)
            .format(Format::Alpha)
            .render(&mut scaler, glyph_id);

        // Blank glyphs such as space have no image but still advance
        let Some(image) = rendered else {
            return Ok(GlyphMask {
                advance,
                ..GlyphMask::default()
            });
        };
        Ok(GlyphMask {
            coverage: coverage_from_content(image.content, &image.data),
            width: image.placement.width,
            height: image.placement.height,
            left: image.placement.left,
            top: image.placement.top,
            advance,
        })
    }
}

impl Default for GlyphRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_mask_is_kept() {
        assert_eq!(coverage_from_content(Content::Mask, &[0, 90, 255]), vec![0, 90, 255]);
    }

    #[test]
    fn test_color_strike_keeps_alpha_channel() {
        let data = [
            255, 200, 0, 255, // opaque yellow
            10, 20, 30, 0, // transparent
            0, 0, 255, 64, // faint blue
        ];
        assert_eq!(coverage_from_content(Content::Color, &data), vec![255, 0, 64]);
    }

    #[test]
    fn test_subpixel_mask_keeps_strongest_channel() {
        let data = [10, 200, 30, 0, 0, 0, 0, 0];
        assert_eq!(coverage_from_content(Content::SubpixelMask, &data), vec![200, 0]);
    }

    #[test]
    fn test_coverage_at_outside_mask_is_zero() {
        let mask = GlyphMask {
            coverage: vec![1, 2, 3, 4],
            width: 2,
            height: 2,
            ..GlyphMask::default()
        };
        assert_eq!(mask.coverage_at(1, 1), 4);
        assert_eq!(mask.coverage_at(2, 0), 0);
        assert_eq!(mask.coverage_at(0, 2), 0);

        // A short buffer reads as empty rather than panicking
        let truncated = GlyphMask {
            coverage: vec![9],
            width: 2,
            height: 2,
            ..GlyphMask::default()
        };
        assert_eq!(truncated.coverage_at(1, 1), 0);
    }
}
