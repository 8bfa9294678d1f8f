// src/color.rs

//! Defines color-related enums (`NamedColor`, `Color`) used by the style
//! snapshot an event can carry.

use serde::{Deserialize, Serialize};

/// Standard ANSI named colors (indices 0-15).
/// These are the 8 normal and 8 bright colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NamedColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,       // Also known as Grey
    BrightBlack = 8, // Also known as Dark Grey / Bright Grey
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

/// Represents a color value under the cursor.
/// Can be a default placeholder, a standard named ANSI color,
/// an indexed color from the 256-color palette, or an RGB true color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Default foreground or background color, to be resolved by the
    /// renderer or backend based on its own defaults.
    Default,
    /// A standard named ANSI color (indices 0-15).
    Named(NamedColor),
    /// An indexed color from the 256-color palette (indices 0-255).
    /// Note: Indices 0-15 can also be represented via `Color::Named`.
    Indexed(u8),
    /// An RGB true color, with each component from 0 to 255.
    Rgb(u8, u8, u8),
}

impl Default for Color {
    /// Returns `Color::Default` as the default color.
    fn default() -> Self {
        Color::Default
    }
}
