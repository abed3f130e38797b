//! Editable text with a cursor
//!
//! All positions are character (Unicode scalar) indices, never byte offsets.

use textbox_core::{Result, TextBoxError};

/// Text content plus an insertion point
///
/// The cursor always satisfies `0 <= cursor <= len()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBuffer {
    value: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial value, cursor at the end
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamping to the text length
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.len());
    }

    /// Replace the whole text, clamping the cursor into the new length
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.cursor.min(self.len());
    }

    /// Insert `c` before the character at `index`
    pub fn insert(&mut self, index: usize, c: char) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(TextBoxError::IndexOutOfRange { index, len });
        }
        let byte_pos = self.char_to_byte(index);
        self.value.insert(byte_pos, c);
        if self.cursor >= index {
            self.cursor += 1;
        }
        Ok(())
    }

    /// Remove and return the character at `index`
    pub fn remove(&mut self, index: usize) -> Result<char> {
        let len = self.len();
        if index >= len {
            return Err(TextBoxError::IndexOutOfRange { index, len });
        }
        let removed = self.value.remove(self.char_to_byte(index));
        if self.cursor > index {
            self.cursor -= 1;
        }
        Ok(removed)
    }

    /// Insert at the cursor and advance past the new character
    pub fn insert_char(&mut self, c: char) {
        let byte_pos = self.char_to_byte(self.cursor);
        self.value.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (backspace)
    ///
    /// Returns false when the cursor is already at the start.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let byte_pos = self.char_to_byte(self.cursor);
        self.value.remove(byte_pos);
        true
    }

    /// Move cursor left, returns whether it moved
    pub fn move_left(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Move cursor right, returns whether it moved
    pub fn move_right(&mut self) -> bool {
        if self.cursor < self.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn move_to_end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn char_to_byte(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}
