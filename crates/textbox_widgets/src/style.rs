//! Text box styling and configuration
//!
//! [`TextBoxStyle`] carries everything about a text box that is not its
//! content: colors, margin, placeholder and input restrictions. It can be
//! built in code with the `with_*` methods or loaded from TOML:
//!
//! ```toml
//! margin = 4
//! text_color = "gray3"
//! background_color = "#f7f7f7"
//! placeholder = "Search..."
//! character_policy = "restricted"
//! max_length = 32
//! ```

use serde::Deserialize;
use textbox_core::{Color, Result, TextBoxError};

/// Placeholder shown by a default-styled text box
pub const DEFAULT_PLACEHOLDER: &str = "Enter Text Here...";

/// Which typed characters a text box accepts
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterPolicy {
    /// Any printable character
    #[default]
    Any,
    /// ASCII letters and digits, space, underscore, hyphen and tilde
    Restricted,
    /// A caller-supplied predicate
    #[serde(skip)]
    Custom(fn(char) -> bool),
}

impl CharacterPolicy {
    /// Check whether a typed character may be inserted
    ///
    /// Control characters are always rejected.
    pub fn accepts(&self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        match self {
            CharacterPolicy::Any => true,
            CharacterPolicy::Restricted => {
                c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-' | '~')
            }
            CharacterPolicy::Custom(accepts) => accepts(c),
        }
    }
}

/// Visual and behavioral configuration for a [`TextBox`](crate::TextBox)
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TextBoxStyle {
    /// Smooth glyph edges
    pub antialias: bool,
    /// Gap in pixels between the box edge and its content
    pub margin: u32,
    /// Glyph and caret color
    pub text_color: Color,
    /// Background while focused
    pub background_color: Color,
    /// Background while unfocused
    pub inactive_color: Color,
    /// Placeholder text color
    pub placeholder_color: Color,
    /// Text shown while the box is empty
    pub placeholder: Option<String>,
    /// Accepted typed characters
    pub character_policy: CharacterPolicy,
    /// Maximum length in characters (0 = unlimited)
    pub max_length: usize,
}

impl Default for TextBoxStyle {
    fn default() -> Self {
        Self {
            antialias: true,
            margin: 2,
            text_color: Color::gray(3),
            background_color: Color::gray(97),
            inactive_color: Color::gray(90),
            placeholder_color: Color::gray(50),
            placeholder: Some(DEFAULT_PLACEHOLDER.to_string()),
            character_policy: CharacterPolicy::Any,
            max_length: 0,
        }
    }
}

impl TextBoxStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a style from TOML, filling unspecified fields with defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| TextBoxError::Config(e.to_string()))
    }

    pub fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_inactive_color(mut self, color: Color) -> Self {
        self.inactive_color = color;
        self
    }

    pub fn with_placeholder_color(mut self, color: Color) -> Self {
        self.placeholder_color = color;
        self
    }

    pub fn with_placeholder(mut self, placeholder: Option<impl Into<String>>) -> Self {
        self.placeholder = placeholder.map(Into::into);
        self
    }

    pub fn with_character_policy(mut self, policy: CharacterPolicy) -> Self {
        self.character_policy = policy;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}
