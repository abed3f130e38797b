//! Textbox error types

use std::convert::Infallible;

use thiserror::Error;

/// Errors raised by textbox widgets and their collaborators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TextBoxError {
    /// A color specification could not be parsed
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A character index fell outside the text buffer
    #[error("Index {index} out of range for text of length {len}")]
    IndexOutOfRange {
        /// The rejected character index
        index: usize,
        /// Length of the text in characters
        len: usize,
    },

    /// The clipboard backend failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Glyph rendering failed
    #[error("Render error: {0}")]
    Render(String),

    /// Font data could not be loaded or parsed
    #[error("Font error: {0}")]
    Font(String),

    /// Style configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<Infallible> for TextBoxError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result type for textbox operations
pub type Result<T> = std::result::Result<T, TextBoxError>;
