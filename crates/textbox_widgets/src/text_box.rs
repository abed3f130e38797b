//! Editable text box widget
//!
//! A [`TextBox`] owns its text, cursor and focus state, interprets input
//! events, and paints itself into a cached [`Image`]. Painting is lazy: every
//! visible change goes through [`TextBox::mark_dirty`], and the surface is only
//! repainted the next time it is requested.
//!
//! Keyboard input is only handled while the box is focused. A left click
//! inside the bounds focuses it and places the cursor at the nearest
//! character boundary; a left click anywhere else unfocuses it.

use textbox_core::{
    Canvas, Clipboard, Color, GlyphStyle, Image, InputEvent, Key, KeyState, KeyboardEvent,
    MouseButton, MouseEvent, Point, Rect, Result, TextBoxError, TextRenderer,
};
use tracing::{debug, trace, warn};

use crate::buffer::TextBuffer;
use crate::hit_test::cursor_index_for_x;
use crate::style::{CharacterPolicy, TextBoxStyle};

/// Width of the text caret in pixels
const CARET_WIDTH: f32 = 2.0;

/// Callback invoked with the current text when the user presses Enter
pub type TextAction = Box<dyn FnMut(&str)>;

/// A single-line editable text entry
pub struct TextBox {
    bounds: Rect,
    buffer: TextBuffer,
    selected: bool,
    style: TextBoxStyle,
    renderer: Box<dyn TextRenderer>,
    clipboard: Box<dyn Clipboard>,
    action: Option<TextAction>,

    /// One image per character of `glyph_text`
    glyphs: Vec<Image>,
    /// Text the glyph cache was built from
    glyph_text: Option<String>,
    /// Set when a glyph-affecting style attribute changed
    glyphs_stale: bool,
    placeholder_image: Option<Image>,
    surface: Image,
    dirty: bool,
}

impl TextBox {
    /// Create a text box with the default style
    ///
    /// The height fits `lines` lines of the renderer's text plus the margin
    /// on both sides.
    pub fn new(
        position: Point,
        width: f32,
        lines: u32,
        renderer: impl TextRenderer + 'static,
        clipboard: impl Clipboard + 'static,
    ) -> Result<Self> {
        Self::with_style(
            position,
            width,
            lines,
            renderer,
            clipboard,
            TextBoxStyle::default(),
        )
    }

    /// Create a text box with an explicit style
    pub fn with_style(
        position: Point,
        width: f32,
        lines: u32,
        renderer: impl TextRenderer + 'static,
        clipboard: impl Clipboard + 'static,
        style: TextBoxStyle,
    ) -> Result<Self> {
        let height = lines
            .checked_mul(renderer.line_height())
            .zip(style.margin.checked_mul(2))
            .and_then(|(text_height, margins)| text_height.checked_add(margins))
            .ok_or_else(|| {
                TextBoxError::Config(format!(
                    "{lines} lines with a {} pixel margin overflow the box height",
                    style.margin
                ))
            })?;
        let bounds = Rect::new(position.x, position.y, width, height as f32);
        let (surface_width, surface_height) = bounds.size().to_pixels();

        let mut text_box = Self {
            bounds,
            buffer: TextBuffer::new(),
            selected: false,
            style,
            renderer: Box::new(renderer),
            clipboard: Box::new(clipboard),
            action: None,
            glyphs: Vec::new(),
            glyph_text: None,
            glyphs_stale: true,
            placeholder_image: None,
            surface: Image::new(surface_width, surface_height),
            dirty: true,
        };
        text_box.placeholder_image = text_box.rasterize_placeholder(
            text_box.style.placeholder.as_deref(),
            text_box.style.placeholder_color,
            text_box.style.antialias,
        )?;
        Ok(text_box)
    }

    // ========================================================================
    // Properties
    // ========================================================================

    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    /// Replace the text, clamping the cursor into the new length
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer.set_text(text);
        self.mark_dirty();
    }

    /// Cursor position in characters
    pub fn cursor_position(&self) -> usize {
        self.buffer.cursor()
    }

    /// Move the cursor, clamping to the text length
    pub fn set_cursor_position(&mut self, position: usize) {
        self.buffer.set_cursor(position);
        self.mark_dirty();
    }

    /// Whether the box has keyboard focus
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        if self.selected != selected {
            debug!(selected, "text box focus changed");
        }
        self.selected = selected;
        self.mark_dirty();
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Move and resize the box, reallocating the surface when the size changes
    pub fn set_bounds(&mut self, bounds: Rect) {
        if bounds.size().to_pixels() != self.bounds.size().to_pixels() {
            let (width, height) = bounds.size().to_pixels();
            self.surface = Image::new(width, height);
        }
        self.bounds = bounds;
        self.mark_dirty();
    }

    /// Move the box without resizing it
    pub fn set_position(&mut self, position: Point) {
        self.bounds.origin = position;
        self.mark_dirty();
    }

    pub fn style(&self) -> &TextBoxStyle {
        &self.style
    }

    pub fn margin(&self) -> u32 {
        self.style.margin
    }

    pub fn set_margin(&mut self, margin: u32) {
        self.style.margin = margin;
        self.mark_dirty();
    }

    pub fn antialias(&self) -> bool {
        self.style.antialias
    }

    /// Toggle antialiasing, re-rendering the placeholder
    pub fn set_antialias(&mut self, antialias: bool) -> Result<()> {
        self.placeholder_image = self.rasterize_placeholder(
            self.style.placeholder.as_deref(),
            self.style.placeholder_color,
            antialias,
        )?;
        self.style.antialias = antialias;
        self.glyphs_stale = true;
        self.mark_dirty();
        Ok(())
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.style.placeholder.as_deref()
    }

    /// Set or clear the placeholder, re-rendering it
    pub fn set_placeholder(&mut self, placeholder: Option<impl Into<String>>) -> Result<()> {
        let placeholder = placeholder.map(Into::into);
        self.placeholder_image = self.rasterize_placeholder(
            placeholder.as_deref(),
            self.style.placeholder_color,
            self.style.antialias,
        )?;
        self.style.placeholder = placeholder;
        self.mark_dirty();
        Ok(())
    }

    pub fn text_color(&self) -> Color {
        self.style.text_color
    }

    /// Set the glyph and caret color
    ///
    /// Accepts a [`Color`], a color string such as `"gray3"` or `"#102030"`,
    /// or an RGB tuple. An invalid color leaves the box unchanged.
    pub fn set_text_color<C>(&mut self, color: C) -> Result<()>
    where
        C: TryInto<Color>,
        TextBoxError: From<C::Error>,
    {
        self.style.text_color = color.try_into()?;
        self.glyphs_stale = true;
        self.mark_dirty();
        Ok(())
    }

    pub fn background_color(&self) -> Color {
        self.style.background_color
    }

    /// Set the background used while focused
    pub fn set_background_color<C>(&mut self, color: C) -> Result<()>
    where
        C: TryInto<Color>,
        TextBoxError: From<C::Error>,
    {
        self.style.background_color = color.try_into()?;
        self.mark_dirty();
        Ok(())
    }

    pub fn inactive_color(&self) -> Color {
        self.style.inactive_color
    }

    /// Set the background used while unfocused
    pub fn set_inactive_color<C>(&mut self, color: C) -> Result<()>
    where
        C: TryInto<Color>,
        TextBoxError: From<C::Error>,
    {
        self.style.inactive_color = color.try_into()?;
        self.mark_dirty();
        Ok(())
    }

    pub fn placeholder_color(&self) -> Color {
        self.style.placeholder_color
    }

    /// Set the placeholder color, re-rendering the placeholder
    pub fn set_placeholder_color<C>(&mut self, color: C) -> Result<()>
    where
        C: TryInto<Color>,
        TextBoxError: From<C::Error>,
    {
        let color = color.try_into()?;
        self.placeholder_image = self.rasterize_placeholder(
            self.style.placeholder.as_deref(),
            color,
            self.style.antialias,
        )?;
        self.style.placeholder_color = color;
        self.mark_dirty();
        Ok(())
    }

    pub fn character_policy(&self) -> CharacterPolicy {
        self.style.character_policy
    }

    pub fn set_character_policy(&mut self, policy: CharacterPolicy) {
        self.style.character_policy = policy;
    }

    /// Maximum text length in characters (0 = unlimited)
    pub fn max_length(&self) -> usize {
        self.style.max_length
    }

    /// Limit typed and pasted text; existing text is not truncated
    pub fn set_max_length(&mut self, max_length: usize) {
        self.style.max_length = max_length;
    }

    pub fn renderer(&self) -> &dyn TextRenderer {
        self.renderer.as_ref()
    }

    /// Swap the font renderer, re-rendering the placeholder and glyphs
    pub fn set_renderer(&mut self, renderer: impl TextRenderer + 'static) -> Result<()> {
        let renderer: Box<dyn TextRenderer> = Box::new(renderer);
        let previous = std::mem::replace(&mut self.renderer, renderer);
        match self.rasterize_placeholder(
            self.style.placeholder.as_deref(),
            self.style.placeholder_color,
            self.style.antialias,
        ) {
            Ok(image) => self.placeholder_image = image,
            Err(e) => {
                self.renderer = previous;
                return Err(e);
            }
        }
        self.glyphs_stale = true;
        self.mark_dirty();
        Ok(())
    }

    /// Replace the clipboard service
    pub fn set_clipboard(&mut self, clipboard: impl Clipboard + 'static) {
        self.clipboard = Box::new(clipboard);
    }

    /// Set the callback invoked with the text when Enter is pressed
    pub fn set_action(&mut self, action: impl FnMut(&str) + 'static) {
        self.action = Some(Box::new(action));
    }

    pub fn clear_action(&mut self) {
        self.action = None;
    }

    /// Whether the surface needs repainting
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Flag the surface for repainting on the next request
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// The widget's current appearance, repainted first if anything changed
    pub fn surface(&mut self) -> Result<&Image> {
        if self.dirty {
            self.render()?;
        }
        Ok(&self.surface)
    }

    /// Draw the widget onto `canvas` at its bounds' origin
    pub fn draw_to<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> Result<()> {
        let origin = self.bounds.origin;
        let surface = self.surface()?;
        canvas.blit(surface, origin);
        Ok(())
    }

    fn glyph_style(&self) -> GlyphStyle {
        GlyphStyle {
            antialias: self.style.antialias,
            color: self.style.text_color,
            background: None,
        }
    }

    fn rasterize_placeholder(
        &self,
        placeholder: Option<&str>,
        color: Color,
        antialias: bool,
    ) -> Result<Option<Image>> {
        match placeholder {
            Some(text) if !text.is_empty() => {
                let style = GlyphStyle {
                    antialias,
                    color,
                    background: None,
                };
                Ok(Some(self.renderer.render(text, &style)?))
            }
            _ => Ok(None),
        }
    }

    /// Rebuild the per-character glyph cache if the text or glyph style changed
    fn refresh_glyphs(&mut self) -> Result<()> {
        if !self.glyphs_stale && self.glyph_text.as_deref() == Some(self.buffer.as_str()) {
            return Ok(());
        }

        let style = self.glyph_style();
        let mut scratch = [0u8; 4];
        let glyphs = self
            .buffer
            .as_str()
            .chars()
            .map(|c| self.renderer.render(c.encode_utf8(&mut scratch), &style))
            .collect::<Result<Vec<_>>>()?;
        trace!(count = glyphs.len(), "regenerated glyph cache");

        self.glyphs = glyphs;
        self.glyph_text = Some(self.buffer.as_str().to_string());
        self.glyphs_stale = false;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.refresh_glyphs()?;

        let margin = self.style.margin as f32;
        let background = if self.selected {
            self.style.background_color
        } else {
            self.style.inactive_color
        };
        self.surface.fill(background);

        let surface_width = self.surface.width() as f32;
        let mut x = 0.0;
        for glyph in &self.glyphs {
            self.surface.blit(glyph, Point::new(margin + x, margin));
            x += glyph.width() as f32;
            if x >= surface_width {
                break;
            }
        }

        if self.buffer.is_empty() {
            if let Some(placeholder) = &self.placeholder_image {
                self.surface.blit(placeholder, Point::new(margin, margin));
            }
        }

        if self.selected {
            let caret_x: u32 = self
                .glyphs
                .iter()
                .take(self.buffer.cursor())
                .map(Image::width)
                .sum();
            let caret = Rect::new(
                margin + caret_x as f32,
                margin,
                CARET_WIDTH,
                self.renderer.line_height() as f32,
            );
            self.surface.fill_rect(caret, self.style.text_color);
        }

        trace!(
            chars = self.glyphs.len(),
            selected = self.selected,
            "rendered text box"
        );
        self.dirty = false;
        Ok(())
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Process one frame's batch of input events in order
    ///
    /// Every event is handled even if an earlier one failed; the first error
    /// is returned after the batch is drained.
    pub fn update(&mut self, events: &[InputEvent]) -> Result<()> {
        let mut first_error = None;
        for event in events {
            let result = match event {
                InputEvent::Keyboard(key_event) if key_event.state == KeyState::Pressed => {
                    if self.selected {
                        self.handle_key(key_event)
                    } else {
                        Ok(())
                    }
                }
                InputEvent::Mouse(MouseEvent::ButtonReleased {
                    button: MouseButton::Left,
                    x,
                    y,
                }) => self.handle_click(Point::new(*x, *y)),
                _ => Ok(()),
            };
            if let Err(e) = result {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn handle_key(&mut self, event: &KeyboardEvent) -> Result<()> {
        if event.modifiers.command() {
            return self.handle_command(event.key);
        }

        match event.key {
            Key::Left => {
                if self.buffer.move_left() {
                    self.mark_dirty();
                }
            }
            Key::Right => {
                if self.buffer.move_right() {
                    self.mark_dirty();
                }
            }
            Key::Enter => self.commit(),
            Key::Backspace | Key::Delete => {
                if self.buffer.delete_backward() {
                    self.mark_dirty();
                }
            }
            Key::Tab => {}
            _ => {
                if let Some(c) = event.text {
                    self.type_char(c);
                }
            }
        }
        Ok(())
    }

    fn handle_command(&mut self, key: Key) -> Result<()> {
        if key.is_letter('c') {
            self.clipboard.copy(self.buffer.as_str())?;
            trace!("copied text to clipboard");
        } else if key.is_letter('v') {
            match self.clipboard.paste() {
                Ok(text) => {
                    let text = self.limit_length(text);
                    self.buffer.set_text(text);
                    self.buffer.move_to_end();
                    self.mark_dirty();
                }
                Err(e) => warn!(error = %e, "paste failed, keeping current text"),
            }
        } else if key.is_letter('x') {
            self.clipboard.copy(self.buffer.as_str())?;
            self.buffer.clear();
            self.mark_dirty();
        }
        Ok(())
    }

    fn type_char(&mut self, c: char) {
        if !self.style.character_policy.accepts(c) {
            trace!(?c, "rejected character");
            return;
        }
        if self.style.max_length > 0 && self.buffer.len() >= self.style.max_length {
            return;
        }
        self.buffer.insert_char(c);
        self.mark_dirty();
    }

    fn limit_length(&self, text: String) -> String {
        match self.style.max_length {
            0 => text,
            max => text.chars().take(max).collect(),
        }
    }

    fn commit(&mut self) {
        if let Some(action) = self.action.as_mut() {
            debug!(chars = self.buffer.len(), "text box committed");
            action(self.buffer.as_str());
        }
    }

    fn handle_click(&mut self, position: Point) -> Result<()> {
        self.set_selected(self.bounds.contains(position));
        if !self.selected {
            return Ok(());
        }

        self.refresh_glyphs()?;
        let widths: Vec<u32> = self.glyphs.iter().map(Image::width).collect();
        let x = position.x - self.bounds.x() - self.style.margin as f32;
        self.buffer.set_cursor(cursor_index_for_x(&widths, x));
        self.mark_dirty();
        Ok(())
    }
}

impl std::fmt::Debug for TextBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBox")
            .field("bounds", &self.bounds)
            .field("text", &self.buffer.as_str())
            .field("cursor", &self.buffer.cursor())
            .field("selected", &self.selected)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}
