//! Software drawing surfaces
//!
//! [`Image`] wraps an [`image::RgbaImage`] with straight (non-premultiplied)
//! alpha. Glyph images and widget surfaces are both `Image`s, and the
//! [`Canvas`] trait is the drawing interface widgets paint through.

use std::path::Path;

use image::{imageops, Pixel, Rgba, RgbaImage};

use crate::color::Color;
use crate::error::{Result, TextBoxError};
use crate::geometry::{Point, Rect};

/// A 2-D pixel surface supporting fills and image blits
pub trait Canvas {
    /// Surface dimensions in pixels
    fn size(&self) -> (u32, u32);

    /// Replace every pixel with `color`
    fn fill(&mut self, color: Color);

    /// Composite a solid rectangle over the surface
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Composite `image` over the surface with its top-left corner at `at`
    fn blit(&mut self, image: &Image, at: Point);
}

/// An owned RGBA8 bitmap
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    buffer: RgbaImage,
}

impl Image {
    /// Create a fully transparent image
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: RgbaImage::new(width, height),
        }
    }

    /// Create an image filled with a single color
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            buffer: RgbaImage::from_pixel(width, height, Rgba(color.to_rgba8())),
        }
    }

    /// Build an image from an 8-bit coverage mask tinted with `color`
    ///
    /// `mask` holds one byte per pixel, row-major. Returns `None` when the
    /// mask length does not match the dimensions.
    pub fn from_mask(width: u32, height: u32, mask: &[u8], color: Color) -> Option<Self> {
        if mask.len() != width as usize * height as usize {
            return None;
        }
        let [r, g, b, a] = color.to_rgba8();
        let raw = mask
            .iter()
            .flat_map(|&coverage| {
                let alpha = (coverage as u16 * a as u16 + 127) / 255;
                [r, g, b, alpha as u8]
            })
            .collect();
        RgbaImage::from_raw(width, height, raw).map(|buffer| Self { buffer })
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Raw RGBA8 pixel data, row-major
    pub fn pixels(&self) -> &[u8] {
        self.buffer.as_raw()
    }

    /// Read one pixel, or `None` outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.buffer.get_pixel_checked(x, y).map(|px| px.0)
    }

    /// Encode the image to `path`, format chosen by extension
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.buffer
            .save(path)
            .map_err(|e| TextBoxError::Render(format!("{}: {e}", path.display())))
    }
}

impl Canvas for Image {
    fn size(&self) -> (u32, u32) {
        self.buffer.dimensions()
    }

    fn fill(&mut self, color: Color) {
        let rgba = Rgba(color.to_rgba8());
        for px in self.buffer.pixels_mut() {
            *px = rgba;
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (width, height) = rect.size().to_pixels();
        let (surface_width, surface_height) = self.size();
        let x = rect.x().round() as i64;
        let y = rect.y().round() as i64;
        let min_x = x.clamp(0, surface_width as i64) as u32;
        let min_y = y.clamp(0, surface_height as i64) as u32;
        let max_x = (x + width as i64).clamp(0, surface_width as i64) as u32;
        let max_y = (y + height as i64).clamp(0, surface_height as i64) as u32;

        let rgba = Rgba(color.to_rgba8());
        for y in min_y..max_y {
            for x in min_x..max_x {
                self.buffer.get_pixel_mut(x, y).blend(&rgba);
            }
        }
    }

    fn blit(&mut self, image: &Image, at: Point) {
        imageops::overlay(
            &mut self.buffer,
            &image.buffer,
            at.x.round() as i64,
            at.y.round() as i64,
        );
    }
}
