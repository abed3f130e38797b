//! Textbox Widgets
//!
//! An editable text-entry widget for real-time rendering loops. The host
//! feeds each frame's input events to [`TextBox::update`] and then draws the
//! widget with [`TextBox::draw_to`] (or reads [`TextBox::surface`] directly).
//! Rendering is lazy: the surface is only repainted after something visible
//! changed.
//!
//! ```rust
//! use textbox_core::{
//!     GlyphStyle, Image, InputEvent, MemoryClipboard, MouseButton, Point, Result, TextRenderer,
//! };
//! use textbox_widgets::TextBox;
//!
//! // A renderer drawing every character as an 8x12 block
//! struct Blocks;
//!
//! impl TextRenderer for Blocks {
//!     fn render(&self, text: &str, style: &GlyphStyle) -> Result<Image> {
//!         Ok(Image::filled(8 * text.chars().count() as u32, 12, style.color))
//!     }
//!
//!     fn line_height(&self) -> u32 {
//!         12
//!     }
//! }
//!
//! let mut text_box = TextBox::new(Point::new(10.0, 10.0), 120.0, 1, Blocks, MemoryClipboard::new())?;
//! text_box.update(&[
//!     InputEvent::mouse_up(MouseButton::Left, 20.0, 15.0),
//!     InputEvent::char('h'),
//!     InputEvent::char('i'),
//! ])?;
//!
//! assert!(text_box.is_selected());
//! assert_eq!(text_box.text(), "hi");
//! assert_eq!(text_box.surface()?.width(), 120);
//! # Ok::<(), textbox_core::TextBoxError>(())
//! ```

pub mod buffer;
pub mod style;
pub mod text_box;

#[cfg(test)]
pub(crate) mod testing;

pub use buffer::TextBuffer;
pub use hit_test::cursor_index_for_x;
pub use style::{CharacterPolicy, TextBoxStyle};
pub use text_box::{TextAction, TextBox};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::style::{CharacterPolicy, TextBoxStyle};
    pub use crate::text_box::TextBox;
    pub use textbox_core::prelude::*;
}
