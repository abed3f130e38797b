//! Collaborator fakes for widget tests

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use textbox_core::{
    Clipboard, GlyphStyle, Image, Result, TextBoxError, TextRenderer,
};

pub const BLOCK_WIDTH: u32 = 10;
pub const LINE_HEIGHT: u32 = 16;

/// Draws every character as a solid `BLOCK_WIDTH` x `LINE_HEIGHT` block and
/// counts how many times it was asked to rasterize
#[derive(Clone, Default)]
pub struct BlockRenderer {
    calls: Rc<Cell<usize>>,
}

impl BlockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to the rasterization counter
    pub fn calls(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }
}

impl TextRenderer for BlockRenderer {
    fn render(&self, text: &str, style: &GlyphStyle) -> Result<Image> {
        self.calls.set(self.calls.get() + 1);
        let width = BLOCK_WIDTH * text.chars().count() as u32;
        Ok(Image::filled(width, LINE_HEIGHT, style.color))
    }

    fn line_height(&self) -> u32 {
        LINE_HEIGHT
    }
}

/// A renderer whose rasterization always fails
pub struct BrokenRenderer;

impl TextRenderer for BrokenRenderer {
    fn render(&self, _text: &str, _style: &GlyphStyle) -> Result<Image> {
        Err(TextBoxError::Render("no glyphs today".into()))
    }

    fn line_height(&self) -> u32 {
        LINE_HEIGHT
    }
}

/// An in-memory clipboard the test keeps a handle to after moving it
/// into a widget
#[derive(Clone, Default)]
pub struct SharedClipboard {
    contents: Rc<RefCell<String>>,
}

impl SharedClipboard {
    pub fn with_text(text: &str) -> Self {
        let clipboard = Self::default();
        clipboard.contents.borrow_mut().push_str(text);
        clipboard
    }

    pub fn contents(&self) -> String {
        self.contents.borrow().clone()
    }
}

impl Clipboard for SharedClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        *self.contents.borrow_mut() = text.to_string();
        Ok(())
    }

    fn paste(&mut self) -> Result<String> {
        Ok(self.contents())
    }
}

/// A clipboard backend that is always unavailable
pub struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn copy(&mut self, _text: &str) -> Result<()> {
        Err(TextBoxError::Clipboard("clipboard unavailable".into()))
    }

    fn paste(&mut self) -> Result<String> {
        Err(TextBoxError::Clipboard("clipboard unavailable".into()))
    }
}

/// Route widget logs to the test harness output
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
