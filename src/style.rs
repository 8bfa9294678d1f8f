// src/style.rs

//! Defines the visual attributes (`AttrFlags`, `Style`) a mouse event can
//! carry as a snapshot of the cell under the cursor.
//!
//! Color definitions (`Color`, `NamedColor`) are found in the `crate::color`
//! module.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::color::Color;

bitflags! {
    /// Represents text attribute flags like bold, underline, reverse video, etc.
    /// These flags correspond to common ANSI SGR (Select Graphic Rendition) parameters.
    ///
    /// The `bitflags` macro allows these to be combined (e.g., `AttrFlags::BOLD | AttrFlags::UNDERLINE`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct AttrFlags: u16 {
        const BOLD          = 1 << 0; // Typically increases intensity or changes font weight.
        const FAINT         = 1 << 1; // Typically decreases intensity.
        const ITALIC        = 1 << 2; // Italicizes text (font-dependent).
        const UNDERLINE     = 1 << 3; // Adds an underline.
        const BLINK         = 1 << 4; // Makes text blink (behavior varies; often slow blink).
        const REVERSE       = 1 << 5; // Swaps foreground and background colors.
        const HIDDEN        = 1 << 6; // Makes text invisible (aka Conceal).
        const STRIKETHROUGH = 1 << 7; // Puts a line through the text.
    }
}

/// The visual attributes of the cell under the mouse cursor: foreground
/// color, background color, and styling flags.
///
/// A compositor pass stamps this onto a mouse event once, before delivery;
/// consumers treat it as read-only context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Style {
    /// Foreground color under the cursor.
    pub fg: Color,
    /// Background color under the cursor.
    pub bg: Color,
    /// Styling flags (bold, italic, underline, etc.).
    pub flags: AttrFlags,
}

impl Style {
    pub const fn new(fg: Color, bg: Color, flags: AttrFlags) -> Self {
        Style { fg, bg, flags }
    }

    /// True if this is the neutral style (default colors, no flags).
    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;

    #[test]
    fn test_default_style_is_plain() {
        assert!(Style::default().is_plain());
    }

    #[test]
    fn test_styled_cell_is_not_plain() {
        let style = Style::new(
            Color::Named(NamedColor::Red),
            Color::Default,
            AttrFlags::BOLD,
        );
        assert!(!style.is_plain());
        assert!(style.flags.contains(AttrFlags::BOLD));
    }
}
