// ABOUTME: Event objects, listener registration and dispatch for the host document.
// ABOUTME: Listeners run for the target and then its ancestors while the event bubbles.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use super::{Document, NodeId};

/// An event listener. Receives the event, the document and the node the
/// listener was registered on.
pub type Listener = Rc<dyn Fn(&Event, &mut Document, NodeId)>;

/// Wraps a closure as a [`Listener`].
pub fn listener<F>(f: F) -> Listener
where
    F: Fn(&Event, &mut Document, NodeId) + 'static,
{
    Rc::new(f)
}

/// An event being dispatched through the document.
pub struct Event {
    kind: String,
    bubbles: bool,
    target: Cell<Option<NodeId>>,
    current_target: Cell<Option<NodeId>>,
    propagation_stopped: Cell<bool>,
    default_prevented: Cell<bool>,
}

impl Event {
    /// Creates a non-bubbling event of the given type.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            bubbles: false,
            target: Cell::new(None),
            current_target: Cell::new(None),
            propagation_stopped: Cell::new(false),
            default_prevented: Cell::new(false),
        }
    }

    /// Creates a bubbling event of the given type.
    pub fn bubbling(kind: impl Into<String>) -> Self {
        Self {
            bubbles: true,
            ..Self::new(kind)
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    /// The node the event was dispatched to.
    pub fn target(&self) -> Option<NodeId> {
        self.target.get()
    }

    /// The node whose listeners are currently running.
    pub fn current_target(&self) -> Option<NodeId> {
        self.current_target.get()
    }

    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }

    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("kind", &self.kind)
            .field("bubbles", &self.bubbles)
            .field("target", &self.target.get())
            .field("propagation_stopped", &self.propagation_stopped.get())
            .field("default_prevented", &self.default_prevented.get())
            .finish()
    }
}

impl Document {
    /// Registers a listener for `kind` on `node`. Listeners are never removed.
    pub fn add_event_listener(&mut self, node: NodeId, kind: impl Into<String>, listener: Listener) {
        self.listeners
            .entry(node)
            .or_default()
            .push((kind.into(), listener));
    }

    /// Number of listeners registered for `kind` on `node`.
    pub fn listener_count(&self, node: NodeId, kind: &str) -> usize {
        self.listeners
            .get(&node)
            .map(|ls| ls.iter().filter(|(k, _)| k == kind).count())
            .unwrap_or(0)
    }

    /// Dispatches `event` at `target`.
    ///
    /// Listeners on the target run first in registration order; if the event
    /// bubbles, each ancestor's listeners follow until propagation is stopped.
    /// Returns false if a listener called `prevent_default`.
    pub fn dispatch_event(&mut self, target: NodeId, event: &Event) -> bool {
        event.target.set(Some(target));

        let mut path = vec![target];
        if event.bubbles {
            let mut cursor = self.parent(target);
            while let Some(ancestor) = cursor {
                path.push(ancestor);
                cursor = self.parent(ancestor);
            }
        }

        for node in path {
            // Cloned out so listeners can mutate the document.
            let matching: Vec<Listener> = match self.listeners.get(&node) {
                Some(ls) => ls
                    .iter()
                    .filter(|(k, _)| *k == event.kind)
                    .map(|(_, l)| Rc::clone(l))
                    .collect(),
                None => continue,
            };
            event.current_target.set(Some(node));
            for listener in matching {
                listener(event, self, node);
            }
            if event.propagation_stopped() {
                break;
            }
        }

        event.current_target.set(None);
        !event.default_prevented()
    }
}
