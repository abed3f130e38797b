//! Clipboard access for copy and paste
//!
//! Widgets talk to the clipboard through the [`Clipboard`] trait.
//! [`MemoryClipboard`] keeps text in-process and works headless;
//! `SystemClipboard` (behind the `system-clipboard` feature) uses the
//! platform clipboard through `arboard`.

use crate::error::Result;

/// A text clipboard service
pub trait Clipboard {
    /// Place `text` on the clipboard, replacing previous content
    fn copy(&mut self, text: &str) -> Result<()>;

    /// Read the current clipboard text
    fn paste(&mut self) -> Result<String>;
}

/// In-process clipboard holding a single string
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: String,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard pre-loaded with `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: text.into(),
        }
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.contents.clear();
        self.contents.push_str(text);
        Ok(())
    }

    fn paste(&mut self) -> Result<String> {
        Ok(self.contents.clone())
    }
}

#[cfg(feature = "system-clipboard")]
pub use system::SystemClipboard;

#[cfg(feature = "system-clipboard")]
mod system {
    use super::Clipboard;
    use crate::error::{Result, TextBoxError};

    /// The platform clipboard
    ///
    /// Construction fails when no clipboard provider is available, for
    /// example on a Linux host without a display server.
    pub struct SystemClipboard {
        manager: arboard::Clipboard,
    }

    impl SystemClipboard {
        pub fn new() -> Result<Self> {
            let manager = arboard::Clipboard::new().map_err(|e| {
                tracing::warn!(error = %e, "system clipboard unavailable");
                TextBoxError::Clipboard(e.to_string())
            })?;
            tracing::debug!("connected to system clipboard");
            Ok(Self { manager })
        }
    }

    impl std::fmt::Debug for SystemClipboard {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("SystemClipboard").finish_non_exhaustive()
        }
    }

    impl Clipboard for SystemClipboard {
        fn copy(&mut self, text: &str) -> Result<()> {
            self.manager
                .set_text(text.to_string())
                .map_err(|e| TextBoxError::Clipboard(e.to_string()))
        }

        fn paste(&mut self) -> Result<String> {
            self.manager
                .get_text()
                .map_err(|e| TextBoxError::Clipboard(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_round_trip() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.paste().unwrap(), "");

        clipboard.copy("hello").unwrap();
        clipboard.copy("world").unwrap();
        assert_eq!(clipboard.paste().unwrap(), "world");
        assert_eq!(clipboard.contents(), "world");
    }
}
