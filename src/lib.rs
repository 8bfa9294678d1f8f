// src/lib.rs

//! Event taxonomy and delivery-policy core for a terminal UI framework.
//!
//! Events flow from producers (input driver, timer driver, layout engine)
//! toward a tree of UI nodes. Each event variant fixes, at definition time,
//! whether it bubbles to ancestors when unhandled, how significant it is for
//! diagnostic tracing, and whether a newer instance may supersede a pending
//! one of the same kind (`Resize` is the one coalescing variant).
//!
//! The widget tree, the renderer, and the raw terminal decoder are external
//! collaborators; this crate defines what an event *is* and how it must
//! behave, plus reference implementations of the queue and pump that honor
//! those policies at the boundary.

// Declare modules
pub mod color;
pub mod config;
pub mod event;
pub mod geometry;
pub mod input;
pub mod keys;
pub mod pump;
pub mod queue;
pub mod style;
pub mod trace;

// Re-export the types most callers need.
pub use config::EventConfig;
pub use event::{
    CallbackFn, Event, EventKind, KeyEvent, MouseEvent, MouseKind, NodeId, TimerId,
};
pub use geometry::{Offset, Size};
pub use input::{InputDriver, InputTranslator, RawInput};
pub use keys::{KeySymbol, Modifiers};
pub use pump::{EventHandler, EventPump, NodeTree};
pub use queue::{Envelope, EventQueue};
pub use style::{AttrFlags, Style};
pub use trace::EventTracer;
