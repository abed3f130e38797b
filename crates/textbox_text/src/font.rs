//! Font face loading and metrics

use std::path::Path;

use textbox_core::{Result, TextBoxError};

/// Font metrics in font units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Units per em
    pub units_per_em: u16,
    /// Distance from baseline to top of the alignment box
    pub ascent: f32,
    /// Distance from baseline to bottom of the alignment box (positive)
    pub descent: f32,
}

impl FontMetrics {
    /// Scale a font-unit value to pixels at the given font size
    pub fn scale(&self, value: f32, font_size: f32) -> f32 {
        value * font_size / self.units_per_em as f32
    }

    pub fn ascent_px(&self, font_size: f32) -> f32 {
        self.scale(self.ascent, font_size)
    }

    pub fn descent_px(&self, font_size: f32) -> f32 {
        self.scale(self.descent, font_size)
    }

    /// Height of one line in whole pixels (ascent plus descent, rounded up)
    pub fn line_height_px(&self, font_size: f32) -> u32 {
        (self.ascent_px(font_size) + self.descent_px(font_size))
            .ceil()
            .max(0.0) as u32
    }
}

/// A parsed font face
pub struct FontFace {
    /// Raw font data
    data: Vec<u8>,
    /// Face index within the font file (for TTC files)
    face_index: usize,
    metrics: FontMetrics,
}

impl FontFace {
    /// Load a font from raw TTF/OTF data (uses face index 0)
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_with_index(data, 0)
    }

    /// Load a font from raw TTF/OTF data with a specific face index
    pub fn from_data_with_index(data: Vec<u8>, face_index: usize) -> Result<Self> {
        let font = swash::FontRef::from_index(&data, face_index).ok_or_else(|| {
            TextBoxError::Font(format!(
                "no font face at index {} in {} bytes of data",
                face_index,
                data.len()
            ))
        })?;

        let raw = font.metrics(&[]);
        if raw.units_per_em == 0 {
            return Err(TextBoxError::Font("font reports zero units per em".into()));
        }
        let metrics = FontMetrics {
            units_per_em: raw.units_per_em,
            ascent: raw.ascent,
            descent: raw.descent.abs(),
        };

        Ok(Self {
            data,
            face_index,
            metrics,
        })
    }

    /// Load a font from a file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| {
            TextBoxError::Font(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_data(data)
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    /// Borrow the face as a swash font reference
    pub fn as_swash(&self) -> Result<swash::FontRef<'_>> {
        swash::FontRef::from_index(&self.data, self.face_index)
            .ok_or_else(|| TextBoxError::Font("invalid font data".into()))
    }

    /// Get the glyph ID for a character, `None` when the font lacks it
    pub fn glyph_id(&self, c: char) -> Option<u16> {
        let id = self.as_swash().ok()?.charmap().map(c);
        (id != 0).then_some(id)
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("face_index", &self.face_index)
            .field("bytes", &self.data.len())
            .field("metrics", &self.metrics)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_font_data() {
        let err = FontFace::from_data(b"definitely not a font".to_vec()).unwrap_err();
        assert!(matches!(err, TextBoxError::Font(_)));
    }

    #[test]
    fn test_missing_font_file() {
        let err = FontFace::from_file(Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(matches!(err, TextBoxError::Font(_)));
    }

    #[test]
    fn test_metrics_scaling() {
        let metrics = FontMetrics {
            units_per_em: 1000,
            ascent: 800.0,
            descent: 200.0,
        };
        assert_eq!(metrics.ascent_px(20.0), 16.0);
        assert_eq!(metrics.descent_px(20.0), 4.0);
        assert_eq!(metrics.line_height_px(20.0), 20);
        assert_eq!(metrics.line_height_px(15.0), 15);
    }
}
