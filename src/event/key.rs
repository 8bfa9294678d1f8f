// src/event/key.rs

//! Defines `KeyEvent`, the keyboard member of the input event family.

use crate::keys::{self, KeySymbol};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A key press, carried by `EventKind::Key`.
///
/// The key is stored in canonical string form: a single character for
/// printable keys, a lowercase name (`"escape"`, `"f1"`, `"space"`) for
/// named keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEvent {
    key: String,
}

impl KeyEvent {
    /// Builds a key event from an already-canonical key string.
    pub fn new(key: impl Into<String>) -> Self {
        KeyEvent { key: key.into() }
    }

    /// The canonical key string.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// True if the key produces a printable character.
    ///
    /// A key is printable if it is `"space"` or if it is not a recognized
    /// named key. Space needs the explicit branch: it is in the named-key
    /// table and still prints.
    pub fn is_printable(&self) -> bool {
        self.key == "space" || !keys::is_named_key(&self.key)
    }
}

impl From<KeySymbol> for KeyEvent {
    /// Normalizes a symbolic key to its canonical string form.
    fn from(symbol: KeySymbol) -> Self {
        KeyEvent::new(symbol.canonical_name())
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}
