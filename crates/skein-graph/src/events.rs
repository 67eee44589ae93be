//! Graph event stream.
//!
//! Four event kinds, one per observable graph transition. Delivery is
//! synchronous with respect to the emitter and follows registration order.
//! The subscriber list is snapshotted before delivery, so handlers are free
//! to subscribe, trace, or prune re-entrantly; events emitted from inside a
//! handler are delivered re-entrantly as well.

use std::sync::Arc;

use parking_lot::RwLock;

use skein_core::{NodeId, ResolveError};

/// An event fired when a graph transition is committed.
///
/// Payload-carrying variants are emitted only after the corresponding store
/// mutation has been committed, so a handler inspecting the graph observes
/// the post-transition state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphEvent {
    /// A node's dependencies were resolved and installed. `dependencies`
    /// carries the resolver's list verbatim, in install order.
    Traced {
        node: NodeId,
        dependencies: Vec<NodeId>,
    },
    /// A node was removed from the store.
    Pruned { node: NodeId },
    /// The resolver failed for a node; the store was left untouched.
    Error { node: NodeId, error: ResolveError },
    /// The pending-job queue holds no valid jobs.
    Complete,
}

impl GraphEvent {
    /// The node this event concerns, if any.
    pub fn node(&self) -> Option<&NodeId> {
        match self {
            Self::Traced { node, .. } | Self::Pruned { node } | Self::Error { node, .. } => {
                Some(node)
            }
            Self::Complete => None,
        }
    }
}

type Handler = Arc<dyn Fn(&GraphEvent) + Send + Sync>;

/// Subscribe/emit fan-out for [`GraphEvent`]s.
///
/// Cloning shares the subscriber list; the bus lives as long as the graph
/// that owns it, and subscribers may attach at any time.
#[derive(Clone, Default)]
pub struct EventBus {
    subscribers: Arc<RwLock<Vec<Handler>>>,
}

impl EventBus {
    /// Create a bus with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for every subsequent event.
    pub fn subscribe(&self, handler: impl Fn(&GraphEvent) + Send + Sync + 'static) {
        self.subscribers.write().push(Arc::new(handler));
    }

    /// Number of registered handlers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Deliver an event to every handler, in registration order.
    ///
    /// The list is snapshotted first so handlers can re-enter the bus (or
    /// the graph) without deadlocking.
    pub(crate) fn emit(&self, event: &GraphEvent) {
        let handlers: Vec<Handler> = self.subscribers.read().clone();
        for handler in handlers {
            handler(event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
