// src/event/mouse.rs

//! Defines `MouseEvent` and `MouseKind`, the mouse members of the input
//! event family.
//!
//! A mouse event carries two coordinate spaces at once: `x`/`y` are relative
//! to the node currently being offered the event and change as hit-testing
//! projects the event into nested widgets; `screen_x`/`screen_y` are
//! absolute terminal coordinates and never change after construction.

use crate::geometry::Offset;
use crate::keys::Modifiers;
use crate::style::Style;

/// The semantic classification of a mouse event.
///
/// All kinds bubble; move and scroll are the noisy ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseKind {
    /// The cursor moved.
    Move,
    /// A button was pressed.
    Down,
    /// A button was released.
    Up,
    /// A press and release on the same spot.
    Click,
    /// The scroll wheel rolled up.
    ScrollUp,
    /// The scroll wheel rolled down.
    ScrollDown,
}

impl MouseKind {
    /// Whether an unhandled delivery is forwarded to the target's parent.
    pub fn bubbles(&self) -> bool {
        match self {
            MouseKind::Move
            | MouseKind::Down
            | MouseKind::Up
            | MouseKind::Click
            | MouseKind::ScrollUp
            | MouseKind::ScrollDown => true,
        }
    }

    /// Diagnostic significance: cursor motion and scrolling are noisy.
    pub fn verbosity(&self) -> u8 {
        match self {
            MouseKind::Move | MouseKind::ScrollUp | MouseKind::ScrollDown => 3,
            MouseKind::Down | MouseKind::Up | MouseKind::Click => 2,
        }
    }

    /// Short name of the kind, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            MouseKind::Move => "MouseMove",
            MouseKind::Down => "MouseDown",
            MouseKind::Up => "MouseUp",
            MouseKind::Click => "Click",
            MouseKind::ScrollUp => "MouseScrollUp",
            MouseKind::ScrollDown => "MouseScrollDown",
        }
    }
}

/// A mouse event, carried by `EventKind::Mouse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseKind,
    /// Column relative to the current target.
    pub x: i32,
    /// Row relative to the current target.
    pub y: i32,
    /// Change in column since the previous mouse event.
    pub delta_x: i32,
    /// Change in row since the previous mouse event.
    pub delta_y: i32,
    /// Index of the pressed button; 0 when no button is involved.
    pub button: u8,
    /// Modifier keys held while the event occurred.
    pub modifiers: Modifiers,
    /// Absolute terminal column. Invariant under coordinate translation.
    pub screen_x: i32,
    /// Absolute terminal row. Invariant under coordinate translation.
    pub screen_y: i32,
    style: Style,
}

impl MouseEvent {
    /// Builds a mouse event whose absolute coordinates default to the
    /// relative ones and whose style snapshot starts neutral.
    pub fn new(
        kind: MouseKind,
        x: i32,
        y: i32,
        delta_x: i32,
        delta_y: i32,
        button: u8,
        modifiers: Modifiers,
    ) -> Self {
        MouseEvent {
            kind,
            x,
            y,
            delta_x,
            delta_y,
            button,
            modifiers,
            screen_x: x,
            screen_y: y,
            style: Style::default(),
        }
    }

    /// Supplies absolute terminal coordinates when they differ from the
    /// relative ones (i.e. the target is not at the screen origin).
    pub fn with_screen_position(mut self, screen_x: i32, screen_y: i32) -> Self {
        self.screen_x = screen_x;
        self.screen_y = screen_y;
        self
    }

    /// Reconstructs an existing event under a different kind, copying every
    /// field verbatim. The new kind's own bubble/verbosity policies apply.
    ///
    /// This is how the input layer promotes a raw sample into a semantic
    /// variant (e.g. an Up at the press position into a Click).
    pub fn from_event(kind: MouseKind, event: &MouseEvent) -> Self {
        MouseEvent {
            kind,
            ..event.clone()
        }
    }

    /// Returns a new event of the same kind translated by `(dx, dy)` into a
    /// nested coordinate space. Deltas, button, modifiers, the absolute
    /// position, and the style snapshot carry over unchanged.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        MouseEvent {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    /// Position relative to the current target.
    pub fn position(&self) -> Offset {
        Offset::new(self.x, self.y)
    }

    /// Absolute position on the terminal.
    pub fn screen_position(&self) -> Offset {
        Offset::new(self.screen_x, self.screen_y)
    }

    pub fn shift(&self) -> bool {
        self.modifiers.shift()
    }

    pub fn meta(&self) -> bool {
        self.modifiers.meta()
    }

    pub fn ctrl(&self) -> bool {
        self.modifiers.ctrl()
    }

    /// The visual attributes under the cursor.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Stamps the style snapshot. Called once by the compositor pass before
    /// delivery; the event is otherwise immutable.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }
}
