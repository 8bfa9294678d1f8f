// src/geometry.rs

//! Defines the small geometry value types carried by events: `Size` for
//! widget/viewport extents and `Offset` for positions and translations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A width/height pair in character cells.
///
/// Used by `Resize` events for the widget size, its scrollable (virtual)
/// extent, and the size of its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Size { width, height }
    }

    /// Total number of cells covered by this size.
    pub fn area(&self) -> u32 {
        u32::from(self.width) * u32::from(self.height)
    }

    /// True if either dimension is zero (nothing can be drawn).
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A position or translation in cell coordinates.
///
/// Components are signed: translating an event into a descendant's
/// coordinate space can produce negative coordinates when the cursor sits
/// above or left of that descendant's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const fn new(x: i32, y: i32) -> Self {
        Offset { x, y }
    }

    /// Chebyshev distance to another offset, used by click detection to
    /// decide whether a press and release landed "on the same spot".
    pub fn cell_distance(&self, other: Offset) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
