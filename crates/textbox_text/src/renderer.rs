//! Single-line text renderer

use std::cell::RefCell;
use std::path::Path;

use textbox_core::{Canvas, GlyphStyle, Image, Point, Result, TextBoxError, TextRenderer};
use tracing::trace;

use crate::font::FontFace;
use crate::rasterizer::GlyphRasterizer;

/// Coverage at or above this value is drawn when antialiasing is off
const ALIAS_THRESHOLD: u8 = 128;

/// A [`TextRenderer`] drawing with one font face at a fixed pixel size
pub struct FontRenderer {
    face: FontFace,
    size: f32,
    rasterizer: RefCell<GlyphRasterizer>,
}

impl FontRenderer {
    /// Load a renderer from TTF/OTF bytes at `size` pixels per em
    pub fn from_bytes(data: impl Into<Vec<u8>>, size: f32) -> Result<Self> {
        if !(size.is_finite() && size > 0.0) {
            return Err(TextBoxError::Font(format!("invalid font size {size}")));
        }
        Ok(Self::new(FontFace::from_data(data.into())?, size))
    }

    /// Load a renderer from a font file
    pub fn from_file(path: impl AsRef<Path>, size: f32) -> Result<Self> {
        let face = FontFace::from_file(path.as_ref())?;
        if !(size.is_finite() && size > 0.0) {
            return Err(TextBoxError::Font(format!("invalid font size {size}")));
        }
        Ok(Self::new(face, size))
    }

    pub fn new(face: FontFace, size: f32) -> Self {
        Self {
            face,
            size,
            rasterizer: RefCell::new(GlyphRasterizer::new()),
        }
    }

    pub fn face(&self) -> &FontFace {
        &self.face
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    /// Lay out `text` into a coverage mask one line tall
    fn coverage(&self, text: &str) -> Result<(Vec<u8>, u32, u32)> {
        let metrics = self.face.metrics();
        let height = metrics.line_height_px(self.size);
        let baseline = metrics.ascent_px(self.size).round() as i32;

        let mut rasterizer = self.rasterizer.borrow_mut();
        let mut glyphs = Vec::new();
        let mut pen_x = 0.0f32;
        for c in text.chars() {
            let glyph_id = self.face.glyph_id(c).unwrap_or(0);
            let glyph = rasterizer.rasterize(&self.face, glyph_id, self.size)?;
            let origin = pen_x.round() as i32;
            pen_x += glyph.advance;
            glyphs.push((origin, glyph));
        }

        let width = pen_x.ceil().max(0.0) as u32;
        let mut mask = vec![0u8; width as usize * height as usize];
        for (origin, glyph) in &glyphs {
            let left = origin + glyph.left;
            let top = baseline - glyph.top;
            for gy in 0..glyph.height {
                let y = top + gy as i32;
                if y < 0 || y >= height as i32 {
                    continue;
                }
                for gx in 0..glyph.width {
                    let x = left + gx as i32;
                    if x < 0 || x >= width as i32 {
                        continue;
                    }
                    let dst = &mut mask[y as usize * width as usize + x as usize];
                    *dst = (*dst).max(glyph.coverage_at(gx, gy));
                }
            }
        }
        Ok((mask, width, height))
    }
}

impl TextRenderer for FontRenderer {
    fn render(&self, text: &str, style: &GlyphStyle) -> Result<Image> {
        let (mut mask, width, height) = self.coverage(text)?;
        if !style.antialias {
            for value in &mut mask {
                *value = if *value >= ALIAS_THRESHOLD { 255 } else { 0 };
            }
        }
        trace!(chars = text.chars().count(), width, height, "rendered text run");

        let glyphs = Image::from_mask(width, height, &mask, style.color)
            .ok_or_else(|| TextBoxError::Render("glyph mask size mismatch".into()))?;
        match style.background {
            Some(background) => {
                let mut image = Image::filled(width, height, background);
                image.blit(&glyphs, Point::ZERO);
                Ok(image)
            }
            None => Ok(glyphs),
        }
    }

    fn line_height(&self) -> u32 {
        self.face.metrics().line_height_px(self.size)
    }

    fn measure(&self, text: &str) -> Result<u32> {
        let (_, width, _) = self.coverage(text)?;
        Ok(width)
    }
}

impl std::fmt::Debug for FontRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontRenderer")
            .field("face", &self.face)
            .field("size", &self.size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use textbox_core::Color;

    use super::*;

    const FIXTURE_FONT: &[u8] = include_bytes!("../tests/fixtures/DejaVuSansMono.ttf");

    fn renderer() -> FontRenderer {
        FontRenderer::from_bytes(FIXTURE_FONT, 20.0).unwrap()
    }

    fn alphas(image: &Image) -> Vec<u8> {
        image.pixels().chunks_exact(4).map(|px| px[3]).collect()
    }

    #[test]
    fn test_rejects_invalid_bytes() {
        let err = FontRenderer::from_bytes(vec![0u8; 16], 16.0).unwrap_err();
        assert!(matches!(err, TextBoxError::Font(_)));
    }

    #[test]
    fn test_rejects_bad_size() {
        let err = FontRenderer::from_bytes(Vec::new(), 0.0).unwrap_err();
        assert!(matches!(err, TextBoxError::Font(_)));

        let err = FontRenderer::from_bytes(FIXTURE_FONT, f32::NAN).unwrap_err();
        assert!(matches!(err, TextBoxError::Font(_)));
    }

    #[test]
    fn test_render_is_one_line_tall() {
        let renderer = renderer();
        let line_height = renderer.line_height();
        assert!(line_height >= 20);

        let image = renderer.render("Hello", &GlyphStyle::default()).unwrap();
        assert_eq!(image.height(), line_height);
        assert!(image.width() > 0);
        assert_eq!(renderer.measure("Hello").unwrap(), image.width());
    }

    #[test]
    fn test_monospace_advances_match() {
        let renderer = renderer();
        let narrow = renderer.measure("iii").unwrap();
        let wide = renderer.measure("WWW").unwrap();
        assert_eq!(narrow, wide);
        assert!(renderer.measure("WWWW").unwrap() > wide);
    }

    #[test]
    fn test_antialiased_edges_have_partial_coverage() {
        let image = renderer().render("Ag", &GlyphStyle::new(Color::BLACK)).unwrap();
        let alphas = alphas(&image);
        assert!(alphas.iter().any(|&a| a == 0));
        assert!(alphas.iter().any(|&a| a > 0 && a < 255));
    }

    #[test]
    fn test_aliased_coverage_is_binary() {
        let style = GlyphStyle::new(Color::BLACK).antialias(false);
        let image = renderer().render("Ag", &style).unwrap();
        let alphas = alphas(&image);
        assert!(alphas.iter().all(|&a| a == 0 || a == 255));
        assert!(alphas.contains(&255));
    }

    #[test]
    fn test_background_fills_whole_image() {
        let style = GlyphStyle::new(Color::BLACK).background(Color::WHITE);
        let image = renderer().render("x y", &style).unwrap();
        assert!(alphas(&image).iter().all(|&a| a >= 254));
        // The leading corner is untouched background
        assert_eq!(image.pixel(0, 0), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_glyphs_take_style_color() {
        let image = renderer().render("M", &GlyphStyle::new(Color::RED)).unwrap();
        let inked: Vec<_> = image.pixels().chunks_exact(4).filter(|px| px[3] > 0).collect();
        assert!(!inked.is_empty());
        assert!(inked.iter().all(|px| px[..3] == [255, 0, 0]));
    }

    #[test]
    fn test_empty_text_has_zero_width() {
        let renderer = renderer();
        let image = renderer.render("", &GlyphStyle::default()).unwrap();
        assert_eq!(image.width(), 0);
        assert_eq!(image.height(), renderer.line_height());
        assert_eq!(renderer.measure("").unwrap(), 0);
    }

    #[test]
    fn test_space_advances_without_ink() {
        let image = renderer().render(" ", &GlyphStyle::default()).unwrap();
        assert!(image.width() > 0);
        assert!(alphas(&image).iter().all(|&a| a == 0));
    }

    #[test]
    fn test_unmapped_character_still_advances() {
        let renderer = renderer();
        assert!(renderer.face().glyph_id('\u{10FFFD}').is_none());
        assert!(renderer.measure("\u{10FFFD}").unwrap() > 0);
    }
}
