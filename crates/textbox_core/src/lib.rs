//! Textbox Core
//!
//! This crate provides the foundational types shared by the textbox crates:
//!
//! - **Colors**: RGBA colors with parsing from X11/CSS style names and hex
//! - **Geometry**: Points, sizes and rectangles in pixel space
//! - **Input**: Keyboard and mouse events fed to widgets each frame
//! - **Surfaces**: A software RGBA [`Image`] and the [`Canvas`] drawing trait
//! - **Collaborators**: The [`TextRenderer`] and [`Clipboard`] traits that
//!   widgets consume without implementing
//!
//! # Example
//!
//! ```rust
//! use textbox_core::{Canvas, Color, Image, Point};
//!
//! let mut surface = Image::new(40, 20);
//! surface.fill("gray90".parse::<Color>().unwrap());
//!
//! let glyph = Image::filled(4, 8, Color::BLACK);
//! surface.blit(&glyph, Point::new(2.0, 2.0));
//!
//! assert_eq!(surface.pixel(3, 3), Some([0, 0, 0, 255]));
//! ```

pub mod canvas;
pub mod clipboard;
pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
pub mod text;

pub use canvas::{Canvas, Image};
pub use clipboard::{Clipboard, MemoryClipboard};
#[cfg(feature = "system-clipboard")]
pub use clipboard::SystemClipboard;
pub use color::Color;
pub use error::{Result, TextBoxError};
pub use geometry::{Point, Rect, Size};
pub use input::{
    InputEvent, Key, KeyState, KeyboardEvent, Modifiers, MouseButton, MouseEvent,
};
pub use text::{GlyphStyle, TextRenderer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::canvas::{Canvas, Image};
    pub use crate::clipboard::{Clipboard, MemoryClipboard};
    pub use crate::color::Color;
    pub use crate::error::{Result, TextBoxError};
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::input::{
        InputEvent, Key, KeyState, KeyboardEvent, Modifiers, MouseButton, MouseEvent,
    };
    pub use crate::text::{GlyphStyle, TextRenderer};
}
