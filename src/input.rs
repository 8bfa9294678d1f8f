// src/input.rs

//! The raw-input boundary: what a terminal backend reports, and how those
//! reports become taxonomy events.
//!
//! `RawInput` is deliberately close to the wire — symbols, button indices,
//! screen-space coordinates. `InputTranslator` turns each sample into zero
//! or more events: it normalizes keys to canonical names, tracks deltas
//! between consecutive mouse samples, and promotes a press/release pair on
//! the same spot into a `Click`.

use crate::config::EventConfig;
use crate::event::{Event, EventKind, KeyEvent, MouseEvent, MouseKind, NodeId};
use crate::geometry::{Offset, Size};
use crate::keys::{KeySymbol, Modifiers};
use anyhow::Result;
use log::trace;

/// An input sample as reported by the platform backend, before translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// A keyboard key was pressed.
    Key {
        symbol: KeySymbol,
        modifiers: Modifiers,
    },
    /// A mouse button was pressed.
    MouseButtonPress {
        button: u8,
        x: i32,
        y: i32,
        modifiers: Modifiers,
    },
    /// A mouse button was released.
    MouseButtonRelease {
        button: u8,
        x: i32,
        y: i32,
        modifiers: Modifiers,
    },
    /// The mouse was moved.
    MouseMove {
        x: i32,
        y: i32,
        modifiers: Modifiers,
    },
    /// The scroll wheel rolled up.
    ScrollUp {
        x: i32,
        y: i32,
        modifiers: Modifiers,
    },
    /// The scroll wheel rolled down.
    ScrollDown {
        x: i32,
        y: i32,
        modifiers: Modifiers,
    },
    /// Bracketed-paste data arrived.
    Paste { text: String },
    /// The terminal was resized, in cells.
    Resize { width: u16, height: u16 },
    /// The terminal window gained input focus.
    FocusGained,
    /// The terminal window lost input focus.
    FocusLost,
    /// The platform asked the application to close.
    CloseRequested,
}

/// A source of raw input samples (e.g. a terminal decoder reading stdin).
///
/// Polling can fail — the terminal can go away under us — so this is the
/// one fallible boundary of the crate.
pub trait InputDriver {
    /// Returns the samples that arrived since the last poll.
    fn poll(&mut self) -> Result<Vec<RawInput>>;
}

/// Translates raw samples into taxonomy events.
///
/// Stateful on purpose: deltas are computed against the previous mouse
/// sample, and click promotion needs the position of the matching press.
#[derive(Debug)]
pub struct InputTranslator {
    /// The node reported as `sender` on every produced event (the app or
    /// the driver's own node).
    sender: NodeId,
    last_position: Option<Offset>,
    pressed: Option<(u8, Offset)>,
    click_tolerance: u32,
}

impl InputTranslator {
    pub fn new(sender: NodeId) -> Self {
        Self::with_config(sender, &EventConfig::default())
    }

    pub fn with_config(sender: NodeId, config: &EventConfig) -> Self {
        InputTranslator {
            sender,
            last_position: None,
            pressed: None,
            click_tolerance: config.click_tolerance,
        }
    }

    /// Translates one raw sample. Most samples map to exactly one event; a
    /// release that completes a click maps to two (Up, then Click), and a
    /// bare modifier press maps to none.
    pub fn translate(&mut self, raw: RawInput) -> Vec<Event> {
        match raw {
            // Chorded names ("ctrl+a") are the key table's concern, so the
            // modifier flags are not folded into the key string here.
            RawInput::Key { symbol, modifiers: _ } => {
                if symbol.is_modifier() {
                    trace!("suppressed bare modifier press {:?}", symbol);
                    return Vec::new();
                }
                vec![Event::new(
                    self.sender,
                    EventKind::Key(KeyEvent::from(symbol)),
                )]
            }
            RawInput::MouseMove { x, y, modifiers } => {
                let sample = self.mouse_sample(MouseKind::Move, x, y, 0, modifiers);
                vec![self.wrap(sample)]
            }
            RawInput::MouseButtonPress {
                button,
                x,
                y,
                modifiers,
            } => {
                self.pressed = Some((button, Offset::new(x, y)));
                let sample = self.mouse_sample(MouseKind::Down, x, y, button, modifiers);
                vec![self.wrap(sample)]
            }
            RawInput::MouseButtonRelease {
                button,
                x,
                y,
                modifiers,
            } => {
                let up = self.mouse_sample(MouseKind::Up, x, y, button, modifiers);
                let mut events = Vec::with_capacity(2);
                if self.completes_click(button, up.position()) {
                    // The Up already carries every field; the Click is the
                    // same sample under its semantic kind.
                    let click = MouseEvent::from_event(MouseKind::Click, &up);
                    events.push(self.wrap(up));
                    events.push(self.wrap(click));
                } else {
                    events.push(self.wrap(up));
                }
                self.pressed = None;
                events
            }
            RawInput::ScrollUp { x, y, modifiers } => {
                let sample = self.mouse_sample(MouseKind::ScrollUp, x, y, 0, modifiers);
                vec![self.wrap(sample)]
            }
            RawInput::ScrollDown { x, y, modifiers } => {
                let sample = self.mouse_sample(MouseKind::ScrollDown, x, y, 0, modifiers);
                vec![self.wrap(sample)]
            }
            RawInput::Paste { text } => {
                vec![Event::new(self.sender, EventKind::Paste { text })]
            }
            RawInput::Resize { width, height } => {
                let size = Size::new(width, height);
                vec![Event::resize(self.sender, size, size, None)]
            }
            RawInput::FocusGained => vec![Event::new(self.sender, EventKind::Focus)],
            RawInput::FocusLost => vec![Event::new(self.sender, EventKind::Blur)],
            RawInput::CloseRequested => {
                vec![Event::new(self.sender, EventKind::ShutdownRequest)]
            }
        }
    }

    /// Polls `driver` once and translates everything it returned.
    pub fn pump_driver(&mut self, driver: &mut dyn InputDriver) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        for raw in driver.poll()? {
            events.extend(self.translate(raw));
        }
        Ok(events)
    }

    fn mouse_sample(
        &mut self,
        kind: MouseKind,
        x: i32,
        y: i32,
        button: u8,
        modifiers: Modifiers,
    ) -> MouseEvent {
        let position = Offset::new(x, y);
        let delta = match self.last_position {
            Some(last) => position - last,
            None => Offset::new(0, 0),
        };
        self.last_position = Some(position);
        // Driver samples are in screen space, so the defaulted screen
        // coordinates are already correct; hit-testing offsets them later.
        MouseEvent::new(kind, x, y, delta.x, delta.y, button, modifiers)
    }

    fn wrap(&self, mouse: MouseEvent) -> Event {
        Event::new(self.sender, EventKind::Mouse(mouse))
    }

    fn completes_click(&self, button: u8, at: Offset) -> bool {
        match self.pressed {
            Some((pressed_button, pressed_at)) => {
                pressed_button == button && pressed_at.cell_distance(at) <= self.click_tolerance
            }
            None => false,
        }
    }
}
