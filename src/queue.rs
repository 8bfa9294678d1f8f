// src/queue.rs

//! The pending-event queue: FIFO delivery with per-variant coalescing.
//!
//! Coalescing is decided by `Event::can_replace` and applies only to entries
//! that are still pending for the same target. Once `pop` hands an event to
//! the consumer it is out of reach; delivered history is never compared.

use crate::event::{Event, NodeId};
use log::trace;
use std::collections::VecDeque;

/// A pending event addressed to a target node.
#[derive(Debug)]
pub struct Envelope {
    /// The node the event will first be delivered to.
    pub target: NodeId,
    pub event: Event,
}

/// FIFO queue of undelivered events.
///
/// Ordering guarantee: absent coalescing, events pop in the order they were
/// pushed. A coalesced entry is removed and its replacement joins the back
/// of the queue; the superseded notification is intentionally lost.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<Envelope>,
}

impl EventQueue {
    pub fn new() -> Self {
        EventQueue::default()
    }

    /// Enqueues an event for `target`, first discarding a same-target
    /// pending entry the incoming event may replace.
    pub fn push(&mut self, target: NodeId, event: Event) {
        if let Some(index) = self
            .pending
            .iter()
            .position(|pending| pending.target == target && event.can_replace(&pending.event))
        {
            let stale = self.pending.remove(index);
            if let Some(stale) = stale {
                trace!(
                    "coalesced pending {} for {} in favor of a newer instance",
                    stale.event.kind.name(),
                    target
                );
            }
        }
        self.pending.push_back(Envelope { target, event });
    }

    /// Hands the oldest pending event to the consumer.
    pub fn pop(&mut self) -> Option<Envelope> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
