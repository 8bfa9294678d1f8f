// src/trace.rs

//! Diagnostic recording of event traffic, gated on per-variant verbosity.
//!
//! Tracing is advisory: it reads `Event::verbosity` and nothing else, and it
//! never influences whether or when an event is delivered.

use crate::event::Event;
use log::{debug, trace};

/// Records events through the `log` facade, skipping anything noisier than
/// its configured ceiling.
#[derive(Debug, Clone, Copy)]
pub struct EventTracer {
    max_verbosity: u8,
}

impl EventTracer {
    /// A tracer that records events up to and including `max_verbosity`.
    pub fn new(max_verbosity: u8) -> Self {
        EventTracer { max_verbosity }
    }

    /// Pure predicate: would `record` log this event?
    pub fn should_record(&self, event: &Event) -> bool {
        event.verbosity() <= self.max_verbosity
    }

    /// Logs the event if it is significant enough. Level-1 events land at
    /// `debug!`, everything noisier at `trace!`.
    pub fn record(&self, event: &Event) {
        if !self.should_record(event) {
            return;
        }
        if event.verbosity() == 1 {
            debug!("event {} from {}", event.kind.name(), event.sender);
        } else {
            trace!(
                "event {} from {} (verbosity {})",
                event.kind.name(),
                event.sender,
                event.verbosity()
            );
        }
    }
}

impl Default for EventTracer {
    /// Records significant and moderate events, drops the noisy tier.
    fn default() -> Self {
        EventTracer::new(crate::config::DEFAULT_TRACE_VERBOSITY)
    }
}
