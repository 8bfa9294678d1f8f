// src/event/mod.rs

//! The event taxonomy: every discrete occurrence the framework routes from
//! producers (input driver, timer driver, layout engine) to the node tree.
//!
//! Each variant fixes three delivery policies at definition time:
//!
//! * `bubbles` — whether an unhandled event is re-dispatched to ancestors;
//! * `verbosity` — how significant the event is for diagnostic recording;
//! * `can_replace` — whether a newer instance may supersede a still-pending
//!   one of the same kind for the same target.
//!
//! The policies are functions of the variant tag alone. Every instance of a
//! variant reports the same values; nothing here is per-instance state.

pub mod key;
pub mod mouse;

pub use key::KeyEvent;
pub use mouse::{MouseEvent, MouseKind};

use crate::geometry::{Offset, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-owning reference to a node in the UI tree.
///
/// Identifies the sender of an event and the target of an envelope; carries
/// no ownership. The tree that resolves ids to widgets is an external
/// collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// A non-owning reference to a scheduled timer.
///
/// The scheduler that fires timers is an external collaborator; events only
/// report which timer fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerId(pub u64);

/// An owned, move-only deferred action carried by `Callback` and `Timer`
/// events.
///
/// The consumer invokes it at most once; a second `invoke` is a no-op that
/// reports `false`. The closure is `Send` so the event can cross the
/// producer/consumer hand-off.
pub struct CallbackFn(Option<Box<dyn FnOnce() + Send>>);

impl CallbackFn {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        CallbackFn(Some(Box::new(f)))
    }

    /// Runs the deferred action. Returns false if it was already run.
    pub fn invoke(&mut self) -> bool {
        match self.0.take() {
            Some(f) => {
                f();
                true
            }
            None => false,
        }
    }

    /// True if the action has not been invoked yet.
    pub fn is_pending(&self) -> bool {
        self.0.is_some()
    }
}

impl fmt::Debug for CallbackFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pending() {
            write!(f, "CallbackFn(<pending>)")
        } else {
            write!(f, "CallbackFn(<spent>)")
        }
    }
}

/// An event instance: the producing node plus the occurrence itself.
///
/// Created once by a producer, possibly coalesced away while pending,
/// delivered to exactly one target, re-dispatched to ancestors only if its
/// kind bubbles, then discarded.
#[derive(Debug)]
pub struct Event {
    /// The node that produced the event. Used by routing guards, never for
    /// ownership.
    pub sender: NodeId,
    pub kind: EventKind,
}

/// Every kind of event in the taxonomy.
///
/// A closed sum: the queue and pump match it exhaustively, so every routing
/// decision is total and checked at compile time.
#[derive(Debug)]
pub enum EventKind {
    /// Widget is mounted and may receive events.
    Mount,
    /// Widget is unmounted and may no longer receive events.
    Unmount,
    /// Widget is asked to remove itself from the tree.
    Remove,
    /// Widget has become visible.
    Show,
    /// Widget has been hidden (visibility flag, layout, or off-screen).
    Hide,
    /// Mouse cursor entered the widget.
    Enter,
    /// Mouse cursor left the widget.
    Leave,
    /// Widget gained input focus.
    Focus,
    /// Widget lost input focus.
    Blur,
    /// A descendant of the widget gained focus.
    DescendantFocus,
    /// A descendant of the widget lost focus.
    DescendantBlur,
    /// The screen returned to the foreground of the screen stack.
    ScreenResume,
    /// The screen was pushed into the background of the screen stack.
    ScreenSuspend,
    /// The app is running but the terminal is not yet in application mode.
    Load,
    /// The queue has drained; a quiet moment for housekeeping.
    Idle,
    /// The screen has refreshed; flush deferred callbacks.
    InvokeCallbacks,
    /// The app is shutting down.
    Shutdown,
    /// Something asked the app to shut down.
    ShutdownRequest,
    /// The widget's geometry changed.
    Resize {
        /// New size of the widget.
        size: Size,
        /// Scrollable extent of the widget's content.
        virtual_size: Size,
        /// Size of the widget's container. Defaults to `size` when the
        /// producer does not supply one.
        container_size: Size,
    },
    /// A named action was invoked (key binding, command palette, etc.).
    Action { action: String },
    /// A one-shot deferred action requested to run on the consumer side.
    Callback { callback: CallbackFn },
    /// A scheduled timer fired.
    Timer {
        timer: TimerId,
        /// Fire timestamp in seconds on the framework's monotonic clock.
        time: f64,
        /// Number of firings so far, this one included.
        count: u64,
        callback: Option<CallbackFn>,
    },
    /// The mouse was captured: subsequent mouse events route to the
    /// capturing node until released.
    MouseCapture { mouse_position: Offset },
    /// The mouse capture ended.
    MouseRelease { mouse_position: Offset },
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event (move, press, release, click, scroll).
    Mouse(MouseEvent),
    /// Text arrived via bracketed paste.
    Paste { text: String },
}

impl Event {
    pub fn new(sender: NodeId, kind: EventKind) -> Self {
        Event { sender, kind }
    }

    /// Builds a `Resize` event, defaulting the container size to the
    /// widget's own size when the producer does not supply one.
    pub fn resize(
        sender: NodeId,
        size: Size,
        virtual_size: Size,
        container_size: Option<Size>,
    ) -> Self {
        Event::new(
            sender,
            EventKind::Resize {
                size,
                virtual_size,
                container_size: container_size.unwrap_or(size),
            },
        )
    }

    pub fn action(sender: NodeId, action: impl Into<String>) -> Self {
        Event::new(
            sender,
            EventKind::Action {
                action: action.into(),
            },
        )
    }

    pub fn callback<F>(sender: NodeId, f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Event::new(
            sender,
            EventKind::Callback {
                callback: CallbackFn::new(f),
            },
        )
    }

    pub fn timer(
        sender: NodeId,
        timer: TimerId,
        time: f64,
        count: u64,
        callback: Option<CallbackFn>,
    ) -> Self {
        Event::new(
            sender,
            EventKind::Timer {
                timer,
                time,
                count,
                callback,
            },
        )
    }

    /// Whether an unhandled delivery is forwarded to the target's parent.
    pub fn bubbles(&self) -> bool {
        self.kind.bubbles()
    }

    /// Diagnostic significance: 1 = significant, 3 = noisy. Consulted only
    /// by tracing, never by delivery.
    pub fn verbosity(&self) -> u8 {
        self.kind.verbosity()
    }

    /// Whether this event may supersede `pending`, a still-undelivered event
    /// for the same target. The target comparison is the queue's job.
    pub fn can_replace(&self, pending: &Event) -> bool {
        self.kind.can_replace(&pending.kind)
    }
}

impl EventKind {
    /// Whether an unhandled delivery is forwarded to the target's parent.
    pub fn bubbles(&self) -> bool {
        match self {
            EventKind::Shutdown
            | EventKind::ShutdownRequest
            | EventKind::Action { .. }
            | EventKind::DescendantFocus
            | EventKind::DescendantBlur
            | EventKind::Key(_) => true,
            EventKind::Mouse(mouse) => mouse.kind.bubbles(),
            EventKind::Mount
            | EventKind::Unmount
            | EventKind::Remove
            | EventKind::Show
            | EventKind::Hide
            | EventKind::Enter
            | EventKind::Leave
            | EventKind::Focus
            | EventKind::Blur
            | EventKind::ScreenResume
            | EventKind::ScreenSuspend
            | EventKind::Load
            | EventKind::Idle
            | EventKind::InvokeCallbacks
            | EventKind::Resize { .. }
            | EventKind::Callback { .. }
            | EventKind::Timer { .. }
            | EventKind::MouseCapture { .. }
            | EventKind::MouseRelease { .. }
            | EventKind::Paste { .. } => false,
        }
    }

    /// Diagnostic significance: 1 = significant, 3 = noisy.
    pub fn verbosity(&self) -> u8 {
        match self {
            EventKind::Resize { .. }
            | EventKind::DescendantFocus
            | EventKind::DescendantBlur => 2,
            EventKind::Callback { .. } | EventKind::Timer { .. } => 3,
            EventKind::Mouse(mouse) => mouse.kind.verbosity(),
            _ => 1,
        }
    }

    /// Whether an incoming event of this kind may supersede `pending`.
    ///
    /// Only `Resize` coalesces: a queue holding an undelivered resize may
    /// discard it in favor of a newer one, because only the latest geometry
    /// is meaningful. Any other pairing reports false; a mismatched kind is
    /// a no-op, not a fault.
    pub fn can_replace(&self, pending: &EventKind) -> bool {
        matches!(
            (self, pending),
            (EventKind::Resize { .. }, EventKind::Resize { .. })
        )
    }

    /// True for the mouse input family (move, press, release, click,
    /// scroll). Capture routing applies only to these.
    pub fn is_mouse_input(&self) -> bool {
        matches!(self, EventKind::Mouse(_))
    }

    /// Short name of the variant, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Mount => "Mount",
            EventKind::Unmount => "Unmount",
            EventKind::Remove => "Remove",
            EventKind::Show => "Show",
            EventKind::Hide => "Hide",
            EventKind::Enter => "Enter",
            EventKind::Leave => "Leave",
            EventKind::Focus => "Focus",
            EventKind::Blur => "Blur",
            EventKind::DescendantFocus => "DescendantFocus",
            EventKind::DescendantBlur => "DescendantBlur",
            EventKind::ScreenResume => "ScreenResume",
            EventKind::ScreenSuspend => "ScreenSuspend",
            EventKind::Load => "Load",
            EventKind::Idle => "Idle",
            EventKind::InvokeCallbacks => "InvokeCallbacks",
            EventKind::Shutdown => "Shutdown",
            EventKind::ShutdownRequest => "ShutdownRequest",
            EventKind::Resize { .. } => "Resize",
            EventKind::Action { .. } => "Action",
            EventKind::Callback { .. } => "Callback",
            EventKind::Timer { .. } => "Timer",
            EventKind::MouseCapture { .. } => "MouseCapture",
            EventKind::MouseRelease { .. } => "MouseRelease",
            EventKind::Key(_) => "Key",
            EventKind::Mouse(mouse) => mouse.kind.name(),
            EventKind::Paste { .. } => "Paste",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const SENDER: NodeId = NodeId(1);

    #[test]
    fn test_policies_are_per_kind_constants() {
        // Two instances of the same kind must agree on both policies.
        let a = Event::resize(SENDER, Size::new(80, 24), Size::new(80, 100), None);
        let b = Event::resize(NodeId(9), Size::new(10, 10), Size::new(10, 10), None);
        assert_eq!(a.bubbles(), b.bubbles());
        assert_eq!(a.verbosity(), b.verbosity());

        let k1 = Event::new(SENDER, EventKind::Key(KeyEvent::new("a")));
        let k2 = Event::new(NodeId(2), EventKind::Key(KeyEvent::new("escape")));
        assert_eq!(k1.bubbles(), k2.bubbles());
        assert_eq!(k1.verbosity(), k2.verbosity());
    }

    #[test]
    fn test_policy_table_spot_checks() {
        assert!(!Event::new(SENDER, EventKind::Mount).bubbles());
        assert!(!Event::new(SENDER, EventKind::Focus).bubbles());
        assert!(Event::new(SENDER, EventKind::DescendantFocus).bubbles());
        assert!(Event::new(SENDER, EventKind::ShutdownRequest).bubbles());
        assert!(Event::action(SENDER, "quit").bubbles());
        assert!(!Event::callback(SENDER, || {}).bubbles());
        assert!(!Event::timer(SENDER, TimerId(0), 0.5, 1, None).bubbles());

        assert_eq!(Event::new(SENDER, EventKind::Mount).verbosity(), 1);
        assert_eq!(Event::new(SENDER, EventKind::DescendantBlur).verbosity(), 2);
        assert_eq!(Event::callback(SENDER, || {}).verbosity(), 3);
        assert_eq!(Event::timer(SENDER, TimerId(0), 0.5, 1, None).verbosity(), 3);
    }

    #[test]
    fn test_resize_container_defaults_to_size() {
        let event = Event::resize(SENDER, Size::new(80, 24), Size::new(80, 200), None);
        match event.kind {
            EventKind::Resize {
                size,
                container_size,
                ..
            } => assert_eq!(container_size, size),
            _ => panic!("expected a resize"),
        }

        let event = Event::resize(
            SENDER,
            Size::new(80, 24),
            Size::new(80, 200),
            Some(Size::new(100, 30)),
        );
        match event.kind {
            EventKind::Resize { container_size, .. } => {
                assert_eq!(container_size, Size::new(100, 30))
            }
            _ => panic!("expected a resize"),
        }
    }

    #[test]
    fn test_only_resize_replaces_resize() {
        let pending = Event::resize(SENDER, Size::new(80, 24), Size::new(80, 24), None);
        let incoming = Event::resize(SENDER, Size::new(100, 30), Size::new(100, 30), None);
        assert!(incoming.can_replace(&pending));
        // Mismatched kinds report "not replaceable", never an error.
        assert!(!incoming.can_replace(&Event::new(SENDER, EventKind::Mount)));
        assert!(!Event::new(SENDER, EventKind::Mount).can_replace(&pending));
        assert!(!Event::action(SENDER, "a").can_replace(&Event::action(SENDER, "b")));
    }

    #[test]
    fn test_callback_invokes_exactly_once() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let mut callback = CallbackFn::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(callback.is_pending());
        assert!(callback.invoke());
        assert!(!callback.invoke());
        assert!(!callback.is_pending());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
