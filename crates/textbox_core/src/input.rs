//! Input event types for keyboard and mouse
//!
//! Hosts translate their windowing backend's events into [`InputEvent`]s and
//! hand each frame's batch to the widgets.

/// Input events
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse event
    Mouse(MouseEvent),
    /// Keyboard event
    Keyboard(KeyboardEvent),
    /// Any other event the host forwards (ignored by widgets)
    Other,
}

impl InputEvent {
    /// A key press carrying the character it produced
    pub fn key_down(key: Key, modifiers: Modifiers, text: Option<char>) -> Self {
        InputEvent::Keyboard(KeyboardEvent {
            key,
            state: KeyState::Pressed,
            modifiers,
            text,
        })
    }

    /// A key release
    pub fn key_up(key: Key, modifiers: Modifiers) -> Self {
        InputEvent::Keyboard(KeyboardEvent {
            key,
            state: KeyState::Released,
            modifiers,
            text: None,
        })
    }

    /// A typed character with no modifiers held
    pub fn char(c: char) -> Self {
        Self::key_down(Key::from_char(c), Modifiers::NONE, Some(c))
    }

    /// A mouse button release at window coordinates
    pub fn mouse_up(button: MouseButton, x: f32, y: f32) -> Self {
        InputEvent::Mouse(MouseEvent::ButtonReleased { button, x, y })
    }
}

// ============================================================================
// Mouse Events
// ============================================================================

/// Mouse events
#[derive(Clone, Debug, PartialEq)]
pub enum MouseEvent {
    /// Mouse moved to position
    Moved {
        /// X position in window coordinates
        x: f32,
        /// Y position in window coordinates
        y: f32,
    },
    /// Mouse button pressed
    ButtonPressed {
        /// Which button was pressed
        button: MouseButton,
        /// X position when pressed
        x: f32,
        /// Y position when pressed
        y: f32,
    },
    /// Mouse button released
    ButtonReleased {
        /// Which button was released
        button: MouseButton,
        /// X position when released
        x: f32,
        /// Y position when released
        y: f32,
    },
}

/// Mouse buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Other button with index
    Other(u16),
}

// ============================================================================
// Keyboard Events
// ============================================================================

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed or released
    pub key: Key,
    /// Whether the key was pressed or released
    pub state: KeyState,
    /// Modifier keys held during this event
    pub modifiers: Modifiers,
    /// Character produced by the key press, if any
    pub text: Option<char>,
}

/// Key press/release state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyState {
    /// Key was pressed
    Pressed,
    /// Key was released
    Released,
}

/// Modifier key state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Shift key is held
    pub shift: bool,
    /// Control key is held
    pub ctrl: bool,
    /// Alt key is held (Option on macOS)
    pub alt: bool,
    /// Meta key is held (Command on macOS, Windows key on Windows)
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// The platform's clipboard-shortcut modifier held alone
    #[cfg(target_os = "macos")]
    pub const COMMAND: Modifiers = Modifiers {
        meta: true,
        ..Modifiers::NONE
    };

    /// The platform's clipboard-shortcut modifier held alone
    #[cfg(not(target_os = "macos"))]
    pub const COMMAND: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };

    /// Check if no modifiers are held
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }

    /// Check if the platform command modifier is held
    /// (Command on macOS, Control elsewhere)
    ///
    /// Off macOS, Control together with Alt is AltGr and types a character,
    /// so it never counts as a command.
    pub fn command(&self) -> bool {
        if cfg!(target_os = "macos") {
            self.meta
        } else {
            self.ctrl && !self.alt
        }
    }
}

/// Key codes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    // Letters
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Special keys
    Space,
    Enter,
    Escape,
    Backspace,
    Tab,
    Delete,

    // Arrow keys
    Left,
    Right,
    Up,
    Down,

    // Character input (keys without a dedicated code)
    Char(char),

    // Unknown key
    Unknown,
}

impl Key {
    /// Map a typed character to its key code
    pub fn from_char(c: char) -> Self {
        const LETTERS: [Key; 26] = [
            Key::A,
            Key::B,
            Key::C,
            Key::D,
            Key::E,
            Key::F,
            Key::G,
            Key::H,
            Key::I,
            Key::J,
            Key::K,
            Key::L,
            Key::M,
            Key::N,
            Key::O,
            Key::P,
            Key::Q,
            Key::R,
            Key::S,
            Key::T,
            Key::U,
            Key::V,
            Key::W,
            Key::X,
            Key::Y,
            Key::Z,
        ];

        match c {
            'a'..='z' => LETTERS[(c as u8 - b'a') as usize],
            'A'..='Z' => LETTERS[(c as u8 - b'A') as usize],
            ' ' => Key::Space,
            '\t' => Key::Tab,
            '\r' | '\n' => Key::Enter,
            _ => Key::Char(c),
        }
    }

    /// Whether this key is the given letter, by code or by character
    pub fn is_letter(&self, letter: char) -> bool {
        match self {
            Key::Char(c) => c.eq_ignore_ascii_case(&letter),
            key => *key == Key::from_char(letter.to_ascii_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_char() {
        assert_eq!(Key::from_char('a'), Key::A);
        assert_eq!(Key::from_char('Z'), Key::Z);
        assert_eq!(Key::from_char(' '), Key::Space);
        assert_eq!(Key::from_char('~'), Key::Char('~'));
    }

    #[test]
    fn test_is_letter() {
        assert!(Key::C.is_letter('c'));
        assert!(Key::Char('V').is_letter('v'));
        assert!(!Key::X.is_letter('c'));
        assert!(!Key::Left.is_letter('c'));
    }

    #[test]
    fn test_command_modifier() {
        assert!(Modifiers::COMMAND.command());
        assert!(!Modifiers::NONE.command());
        assert!(!Modifiers::SHIFT.command());
        assert!(Modifiers::NONE.is_empty());
    }

    #[test]
    fn test_altgr_is_not_command() {
        let altgr = Modifiers {
            ctrl: true,
            alt: true,
            ..Modifiers::NONE
        };
        assert!(!altgr.command());
        if !cfg!(target_os = "macos") {
            assert!(Modifiers { alt: false, ..altgr }.command());
        }
    }
}
