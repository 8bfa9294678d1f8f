// src/keys.rs

//! Defines key symbols, modifier flags, and the canonical key-name table.
//!
//! Events carry keys as canonical strings (`"a"`, `"escape"`, `"f1"`), so the
//! name table here is the single source of truth for which names denote
//! recognized non-printable keys. `KeyEvent::is_printable` consults it.

use bitflags::bitflags;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

bitflags! {
    /// Represents a keyboard modifier.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT = 1 << 2; // Also known as Option on macOS
        const SUPER = 1 << 3; // Also known as Windows key or Command key
        const CAPS_LOCK = 1 << 4;
        const NUM_LOCK = 1 << 5;
    }
}

impl Modifiers {
    pub fn shift(&self) -> bool {
        self.contains(Modifiers::SHIFT)
    }

    pub fn ctrl(&self) -> bool {
        self.contains(Modifiers::CONTROL)
    }

    /// Terminal mouse reporting calls the Alt key "Meta"; the taxonomy
    /// follows that convention.
    pub fn meta(&self) -> bool {
        self.contains(Modifiers::ALT)
    }
}

/// Represents a key symbol.
///
/// This enum defines all possible keypresses in the project grammar.
/// It includes common keys like alphanumeric characters, function keys,
/// modifier keys, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum KeySymbol {
    // Alphanumeric keys
    Char(char),

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // Modifier keys (when pressed and released without other keys)
    Shift,
    Control,
    Alt,
    Super,

    // Navigation keys
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    Delete,

    // Other common keys
    Enter,
    Backspace,
    Tab,
    Escape,
    Menu, // Context menu key

    // Unidentified key
    #[default]
    Unknown,
}

impl KeySymbol {
    /// Returns true if the key symbol represents a modifier key.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            KeySymbol::Shift | KeySymbol::Control | KeySymbol::Alt | KeySymbol::Super
        )
    }

    /// Returns the canonical string form of this key.
    ///
    /// Printable characters map to themselves, except space, which maps to
    /// the named key `"space"`. Everything else maps to a lowercase name
    /// from the key-name table.
    pub fn canonical_name(&self) -> String {
        match self {
            KeySymbol::Char(' ') => "space".to_string(),
            KeySymbol::Char(c) => c.to_string(),
            KeySymbol::F1 => "f1".to_string(),
            KeySymbol::F2 => "f2".to_string(),
            KeySymbol::F3 => "f3".to_string(),
            KeySymbol::F4 => "f4".to_string(),
            KeySymbol::F5 => "f5".to_string(),
            KeySymbol::F6 => "f6".to_string(),
            KeySymbol::F7 => "f7".to_string(),
            KeySymbol::F8 => "f8".to_string(),
            KeySymbol::F9 => "f9".to_string(),
            KeySymbol::F10 => "f10".to_string(),
            KeySymbol::F11 => "f11".to_string(),
            KeySymbol::F12 => "f12".to_string(),
            KeySymbol::Shift => "shift".to_string(),
            KeySymbol::Control => "control".to_string(),
            KeySymbol::Alt => "alt".to_string(),
            KeySymbol::Super => "super".to_string(),
            KeySymbol::Left => "left".to_string(),
            KeySymbol::Right => "right".to_string(),
            KeySymbol::Up => "up".to_string(),
            KeySymbol::Down => "down".to_string(),
            KeySymbol::PageUp => "pageup".to_string(),
            KeySymbol::PageDown => "pagedown".to_string(),
            KeySymbol::Home => "home".to_string(),
            KeySymbol::End => "end".to_string(),
            KeySymbol::Insert => "insert".to_string(),
            KeySymbol::Delete => "delete".to_string(),
            KeySymbol::Enter => "enter".to_string(),
            KeySymbol::Backspace => "backspace".to_string(),
            KeySymbol::Tab => "tab".to_string(),
            KeySymbol::Escape => "escape".to_string(),
            KeySymbol::Menu => "menu".to_string(),
            KeySymbol::Unknown => "unknown".to_string(),
        }
    }
}

/// Canonical names of every recognized named (non-printable) key.
///
/// "space" is in this table even though it is printable; key classification
/// special-cases it.
const NAMED_KEY_NAMES: &[&str] = &[
    "space",
    "f1",
    "f2",
    "f3",
    "f4",
    "f5",
    "f6",
    "f7",
    "f8",
    "f9",
    "f10",
    "f11",
    "f12",
    "shift",
    "control",
    "alt",
    "super",
    "left",
    "right",
    "up",
    "down",
    "pageup",
    "pagedown",
    "home",
    "end",
    "insert",
    "delete",
    "enter",
    "backspace",
    "tab",
    "escape",
    "menu",
    "unknown",
];

static NAMED_KEYS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NAMED_KEY_NAMES.iter().copied().collect());

/// Returns true if `name` is a recognized named key.
pub fn is_named_key(name: &str) -> bool {
    NAMED_KEYS.contains(name)
}
