// src/pump.rs

//! The message pump: drains the pending queue and delivers each event to its
//! target, honoring mouse capture at post time and the per-variant bubble
//! flag at delivery time.
//!
//! The pump knows nothing about widgets. It sees the tree through the
//! `NodeTree` trait and the consumers through `EventHandler`, which keeps
//! the delivery logic testable with mock collaborators.

use crate::event::{Event, EventKind, NodeId};
use crate::queue::{Envelope, EventQueue};
use crate::trace::EventTracer;
use log::{trace, warn};

/// Upper bound on the parent-chain walk during bubbling. A well-formed tree
/// never gets close; hitting it means a `NodeTree` implementation has a
/// parent cycle.
const MAX_BUBBLE_DEPTH: usize = 1024;

/// Read-only view of the node tree's parent links.
pub trait NodeTree {
    /// The parent of `node`, or `None` at the root.
    fn parent(&self, node: NodeId) -> Option<NodeId>;
}

/// Consumer side of delivery.
pub trait EventHandler {
    /// Offers `event` to `node`. Returning true marks the event handled and
    /// stops any further bubbling. The event is mutable so the handler can
    /// take owned payloads (e.g. invoke a callback).
    fn handle_event(&mut self, node: NodeId, event: &mut Event) -> bool;
}

/// Delivers queued events to a tree of nodes, one at a time.
#[derive(Debug, Default)]
pub struct EventPump {
    queue: EventQueue,
    capture: Option<NodeId>,
    tracer: EventTracer,
}

impl EventPump {
    pub fn new() -> Self {
        EventPump::default()
    }

    pub fn with_tracer(tracer: EventTracer) -> Self {
        EventPump {
            tracer,
            ..EventPump::default()
        }
    }

    /// The node currently holding the mouse capture, if any.
    pub fn captured(&self) -> Option<NodeId> {
        self.capture
    }

    /// Number of undelivered events.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Enqueues an event for `target`.
    ///
    /// Capture bookkeeping happens here, at post time, so that mouse events
    /// queued behind a capture are redirected even though the capture has
    /// not been delivered yet. While a capture is held, every mouse input
    /// event routes to the capturing node regardless of its own coordinates.
    pub fn post(&mut self, target: NodeId, event: Event) {
        self.tracer.record(&event);
        let target = match &event.kind {
            EventKind::MouseCapture { .. } => {
                self.capture = Some(target);
                target
            }
            EventKind::MouseRelease { .. } => {
                self.capture = None;
                target
            }
            kind if kind.is_mouse_input() => match self.capture {
                Some(captured) => {
                    trace!("mouse event redirected to capturing {}", captured);
                    captured
                }
                None => target,
            },
            _ => target,
        };
        self.queue.push(target, event);
    }

    /// Drains the queue, delivering every pending event. Returns the number
    /// of events delivered (coalesced-away events were never delivered and
    /// do not count).
    pub fn run<T, H>(&mut self, tree: &T, handler: &mut H) -> usize
    where
        T: NodeTree,
        H: EventHandler,
    {
        let mut delivered = 0;
        while let Some(Envelope { target, mut event }) = self.queue.pop() {
            self.deliver(tree, handler, target, &mut event);
            delivered += 1;
        }
        delivered
    }

    /// Drains the queue, then notifies `app` that the pump is idle.
    ///
    /// `Idle` is a pseudo-event: it is produced by the pump itself once
    /// there is nothing left to deliver, and does not pass through the
    /// queue.
    pub fn run_until_idle<T, H>(&mut self, tree: &T, handler: &mut H, app: NodeId) -> usize
    where
        T: NodeTree,
        H: EventHandler,
    {
        let delivered = self.run(tree, handler);
        let mut idle = Event::new(app, EventKind::Idle);
        self.tracer.record(&idle);
        self.deliver(tree, handler, app, &mut idle);
        delivered
    }

    /// Delivers one event: offer it to `target`, then walk rootward while
    /// it bubbles unhandled. An event that reaches the root unhandled is
    /// silently dropped.
    fn deliver<T, H>(&self, tree: &T, handler: &mut H, target: NodeId, event: &mut Event)
    where
        T: NodeTree,
        H: EventHandler,
    {
        let mut node = target;
        for _ in 0..MAX_BUBBLE_DEPTH {
            if handler.handle_event(node, event) {
                trace!("{} handled by {}", event.kind.name(), node);
                return;
            }
            if !event.bubbles() {
                trace!("{} unhandled at {}; does not bubble", event.kind.name(), node);
                return;
            }
            match tree.parent(node) {
                Some(parent) => node = parent,
                None => {
                    trace!(
                        "{} from {} reached the root unhandled; dropped",
                        event.kind.name(),
                        event.sender
                    );
                    return;
                }
            }
        }
        warn!(
            "bubbling of {} exceeded {} ancestors; parent links look cyclic",
            event.kind.name(),
            MAX_BUBBLE_DEPTH
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{KeyEvent, MouseEvent, MouseKind};
    use crate::geometry::{Offset, Size};
    use crate::keys::Modifiers;
    use std::collections::HashMap;

    const APP: NodeId = NodeId(1);
    const SCREEN: NodeId = NodeId(2);
    const PANEL: NodeId = NodeId(3);
    const BUTTON: NodeId = NodeId(4);

    /// app <- screen <- panel <- button
    struct MapTree {
        parents: HashMap<NodeId, NodeId>,
    }

    impl MapTree {
        fn sample() -> Self {
            let mut parents = HashMap::new();
            parents.insert(SCREEN, APP);
            parents.insert(PANEL, SCREEN);
            parents.insert(BUTTON, PANEL);
            MapTree { parents }
        }
    }

    impl NodeTree for MapTree {
        fn parent(&self, node: NodeId) -> Option<NodeId> {
            self.parents.get(&node).copied()
        }
    }

    /// Records every delivery and handles events at the configured nodes.
    struct RecordingHandler {
        deliveries: Vec<(NodeId, &'static str)>,
        handles_at: Vec<NodeId>,
    }

    impl RecordingHandler {
        fn handling(handles_at: Vec<NodeId>) -> Self {
            RecordingHandler {
                deliveries: Vec::new(),
                handles_at,
            }
        }

        fn passive() -> Self {
            Self::handling(Vec::new())
        }
    }

    impl EventHandler for RecordingHandler {
        fn handle_event(&mut self, node: NodeId, event: &mut Event) -> bool {
            self.deliveries.push((node, event.kind.name()));
            self.handles_at.contains(&node)
        }
    }

    fn mouse_move(x: i32, y: i32) -> Event {
        Event::new(
            APP,
            EventKind::Mouse(MouseEvent::new(
                MouseKind::Move,
                x,
                y,
                0,
                0,
                0,
                Modifiers::empty(),
            )),
        )
    }

    #[test]
    fn test_bubbling_stops_at_first_handler() {
        let tree = MapTree::sample();
        let mut handler = RecordingHandler::handling(vec![PANEL]);
        let mut pump = EventPump::new();
        pump.post(BUTTON, Event::new(APP, EventKind::Key(KeyEvent::new("a"))));

        assert_eq!(pump.run(&tree, &mut handler), 1);
        assert_eq!(
            handler.deliveries,
            vec![(BUTTON, "Key"), (PANEL, "Key")],
            "delivery should stop at the first handling ancestor"
        );
    }

    #[test]
    fn test_non_bubbling_event_drops_at_target() {
        let tree = MapTree::sample();
        let mut handler = RecordingHandler::passive();
        let mut pump = EventPump::new();
        pump.post(BUTTON, Event::new(APP, EventKind::Mount));

        pump.run(&tree, &mut handler);
        assert_eq!(handler.deliveries, vec![(BUTTON, "Mount")]);
    }

    #[test]
    fn test_unhandled_bubbling_event_is_dropped_at_root() {
        let tree = MapTree::sample();
        let mut handler = RecordingHandler::passive();
        let mut pump = EventPump::new();
        pump.post(BUTTON, Event::action(APP, "quit"));

        pump.run(&tree, &mut handler);
        assert_eq!(
            handler.deliveries,
            vec![
                (BUTTON, "Action"),
                (PANEL, "Action"),
                (SCREEN, "Action"),
                (APP, "Action"),
            ]
        );
    }

    #[test]
    fn test_capture_redirects_intervening_mouse_events() {
        let tree = MapTree::sample();
        let mut handler = RecordingHandler::handling(vec![BUTTON, PANEL]);
        let mut pump = EventPump::new();

        pump.post(
            BUTTON,
            Event::new(
                APP,
                EventKind::MouseCapture {
                    mouse_position: Offset::new(3, 3),
                },
            ),
        );
        assert_eq!(pump.captured(), Some(BUTTON));

        // These carry coordinates that would hit-test to other nodes; the
        // capture must win.
        pump.post(PANEL, mouse_move(50, 1));
        pump.post(SCREEN, mouse_move(60, 2));
        pump.post(
            BUTTON,
            Event::new(
                APP,
                EventKind::MouseRelease {
                    mouse_position: Offset::new(9, 9),
                },
            ),
        );
        assert_eq!(pump.captured(), None);

        // After release, routing reverts to the posted target.
        pump.post(PANEL, mouse_move(50, 1));

        pump.run(&tree, &mut handler);
        assert_eq!(
            handler.deliveries,
            vec![
                (BUTTON, "MouseCapture"),
                (BUTTON, "MouseMove"),
                (BUTTON, "MouseMove"),
                (BUTTON, "MouseRelease"),
                (PANEL, "MouseMove"),
            ]
        );
    }

    #[test]
    fn test_capture_does_not_redirect_non_mouse_events() {
        let tree = MapTree::sample();
        let mut handler = RecordingHandler::handling(vec![BUTTON, PANEL]);
        let mut pump = EventPump::new();

        pump.post(
            BUTTON,
            Event::new(
                APP,
                EventKind::MouseCapture {
                    mouse_position: Offset::new(0, 0),
                },
            ),
        );
        pump.post(PANEL, Event::new(APP, EventKind::Key(KeyEvent::new("a"))));

        pump.run(&tree, &mut handler);
        assert_eq!(
            handler.deliveries,
            vec![(BUTTON, "MouseCapture"), (PANEL, "Key")]
        );
    }

    #[test]
    fn test_coalescing_applies_before_delivery() {
        let tree = MapTree::sample();
        let mut handler = RecordingHandler::passive();
        let mut pump = EventPump::new();
        let small = Size::new(80, 24);
        let large = Size::new(100, 30);
        pump.post(PANEL, Event::resize(APP, small, small, None));
        pump.post(PANEL, Event::resize(APP, large, large, None));
        assert_eq!(pump.pending(), 1);

        let delivered = pump.run(&tree, &mut handler);
        assert_eq!(delivered, 1, "the superseded resize is never delivered");
        assert_eq!(handler.deliveries, vec![(PANEL, "Resize")]);
    }

    #[test]
    fn test_run_until_idle_notifies_app_last() {
        let tree = MapTree::sample();
        let mut handler = RecordingHandler::passive();
        let mut pump = EventPump::new();
        pump.post(BUTTON, Event::new(APP, EventKind::Show));

        pump.run_until_idle(&tree, &mut handler, APP);
        assert_eq!(
            handler.deliveries,
            vec![(BUTTON, "Show"), (APP, "Idle")]
        );
    }

    #[test]
    fn test_handler_can_consume_callback_payload() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::sync::Arc;

        struct CallbackRunner;

        impl EventHandler for CallbackRunner {
            fn handle_event(&mut self, _node: NodeId, event: &mut Event) -> bool {
                if let EventKind::Callback { callback } = &mut event.kind {
                    callback.invoke();
                    return true;
                }
                false
            }
        }

        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);
        let tree = MapTree::sample();
        let mut pump = EventPump::new();
        pump.post(
            APP,
            Event::callback(APP, move || flag.store(true, Ordering::SeqCst)),
        );

        pump.run(&tree, &mut CallbackRunner);
        assert!(ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_cyclic_parent_links_do_not_hang() {
        struct CyclicTree;

        impl NodeTree for CyclicTree {
            fn parent(&self, node: NodeId) -> Option<NodeId> {
                // Two nodes pointing at each other: malformed on purpose.
                Some(if node == PANEL { BUTTON } else { PANEL })
            }
        }

        let mut handler = RecordingHandler::passive();
        let mut pump = EventPump::new();
        pump.post(BUTTON, Event::action(APP, "quit"));
        pump.run(&CyclicTree, &mut handler);
        assert_eq!(handler.deliveries.len(), MAX_BUBBLE_DEPTH);
    }
}
