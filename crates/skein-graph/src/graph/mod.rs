//! The graph facade composing store, job queue, engines, and events.

mod prune;
mod trace;

use std::sync::Arc;

use parking_lot::RwLock;

use skein_core::{NodeId, Resolver, Result};

use crate::events::EventBus;
use crate::jobs::PendingJobs;
use crate::notation::NotationError;
use crate::statistics::GraphStatistics;
use crate::store::NodeStore;

/// Incremental dependency graph driven by an external resolver.
///
/// The facade owns the node store and the pending-job queue behind a
/// single lock; every mutation commits under that lock and is released
/// before the corresponding event fires, so handlers always observe a
/// consistent store. Cloning is cheap and clones observe the same graph.
#[derive(Clone)]
pub struct Graph {
    pub(crate) inner: Arc<RwLock<GraphInner>>,
    pub(crate) events: EventBus,
    pub(crate) resolver: Arc<dyn Resolver>,
}

#[derive(Debug, Default)]
pub(crate) struct GraphInner {
    pub(crate) store: NodeStore,
    pub(crate) jobs: PendingJobs,
    /// Index of the next job the driver has not yet dispatched.
    pub(crate) next_dispatch: usize,
}

impl GraphInner {
    /// Next valid job awaiting dispatch, advancing the cursor past it.
    /// Jobs invalidated before dispatch are skipped: their result would be
    /// discarded at the validity re-check anyway.
    pub(crate) fn next_job_to_dispatch(&mut self) -> Option<NodeId> {
        while let Some(job) = self.jobs.get(self.next_dispatch) {
            self.next_dispatch += 1;
            if job.valid {
                return Some(job.node.clone());
            }
        }
        None
    }
}

impl Graph {
    /// Create an empty graph around a resolver.
    pub fn new(resolver: impl Resolver + 'static) -> Self {
        Self::with_nodes(NodeStore::new(), resolver)
    }

    /// Create a graph seeded with an initial node store.
    pub fn with_nodes(nodes: NodeStore, resolver: impl Resolver + 'static) -> Self {
        Self {
            inner: Arc::new(RwLock::new(GraphInner {
                store: nodes,
                jobs: PendingJobs::default(),
                next_dispatch: 0,
            })),
            events: EventBus::new(),
            resolver: Arc::new(resolver),
        }
    }

    /// Create a graph seeded from the `a` / `a -> b` text notation.
    pub fn from_notation(
        text: &str,
        resolver: impl Resolver + 'static,
    ) -> std::result::Result<Self, NotationError> {
        Ok(Self::with_nodes(NodeStore::from_notation(text)?, resolver))
    }

    /// The graph's event bus.
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Mark a node as an entry. Fails if the node is not defined;
    /// idempotent otherwise.
    pub fn set_node_as_entry(&self, id: impl AsRef<str>) -> Result<()> {
        self.inner.write().store.set_entry(id, true)
    }

    /// Clear a node's entry marking. Fails if the node is not defined.
    pub fn unset_node_as_entry(&self, id: impl AsRef<str>) -> Result<()> {
        self.inner.write().store.set_entry(id, false)
    }

    /// True if the node is present in the current store.
    pub fn is_node_defined(&self, id: impl AsRef<str>) -> bool {
        self.inner.read().store.contains(id)
    }

    /// True if a valid resolution job exists for the node.
    pub fn is_node_pending(&self, id: impl AsRef<str>) -> bool {
        self.inner.read().jobs.is_pending(id)
    }

    /// Snapshot of the current node store.
    ///
    /// The snapshot stays coherent while the engine keeps mutating its own
    /// state; nodes are shared structurally, so this is cheap.
    pub fn nodes(&self) -> NodeStore {
        self.inner.read().store.clone()
    }

    /// Read-only view of the pending-job queue, including consumed and
    /// invalidated history.
    pub fn pending_jobs(&self) -> PendingJobs {
        self.inner.read().jobs.clone()
    }

    /// Counters describing the current graph.
    pub fn statistics(&self) -> GraphStatistics {
        let inner = self.inner.read();
        GraphStatistics {
            node_count: inner.store.len(),
            edge_count: inner.store.edge_count(),
            entry_count: inner.store.iter().filter(|node| node.is_entry).count(),
            total_jobs: inner.jobs.len(),
            valid_jobs: inner.jobs.valid_count(),
        }
    }

    /// Emit `Complete` when no valid job remains.
    ///
    /// Called after every transition that can shrink the valid-job count:
    /// job consumption, resolution failure, and every prune. Level
    /// triggered, so a no-op prune on a drained queue reports completion
    /// again rather than staying silent.
    pub(crate) fn evaluate_completion(&self) {
        let drained = !self.inner.read().jobs.any_valid();
        if drained {
            tracing::debug!("pending-job queue drained");
            self.events.emit(&crate::events::GraphEvent::Complete);
        }
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("Graph")
            .field("nodes", &inner.store.len())
            .field("valid_jobs", &inner.jobs.valid_count())
            .finish()
    }
}
