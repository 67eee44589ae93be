//! Prune engine: cycle-safe removal of orphaned subgraphs.
//!
//! Pruning a node removes it plus everything that transitively loses all
//! dependents, without ever removing an entry node transitively. Cycles
//! make the obvious "drop nodes whose dependents are all gone" iteration
//! insufficient: in a cycle every member keeps a dependent until the whole
//! cycle goes at once. The computation here works from the other side -
//! it finds what must *survive* and removes the rest of the reachable
//! region:
//!
//! 1. collect the region reachable from the root along dependency edges;
//! 2. within it, seed liveness from entry nodes and from nodes with a
//!    dependent outside the region (outside nodes are untouched by
//!    definition), then propagate liveness along dependency edges, never
//!    through the root;
//! 3. everything reachable but not live is an orphan, removed in
//!    breadth-first order from the root.
//!
//! A cycle reachable only from the root has no live member and collapses
//! collectively; a cycle anchored by an entry or an outside dependent
//! stays whole.

use std::collections::VecDeque;

use rustc_hash::FxHashSet as HashSet;
use tracing::{debug, trace};

use skein_core::NodeId;

use crate::events::GraphEvent;
use crate::store::NodeStore;

use super::Graph;

impl Graph {
    /// Remove `id` and every node orphaned by its removal.
    ///
    /// The named root is removed even when marked as an entry - the entry
    /// flag only protects against *transitive* removal. Pruning a node
    /// that is not defined is a no-op, but completion is still evaluated
    /// so a drained queue keeps reporting quiescence.
    pub fn prune_node(&self, id: impl Into<NodeId>) {
        let root = id.into();

        let orphans = {
            let inner = self.inner.read();
            if inner.store.contains(&root) {
                orphan_set(&inner.store, &root)
            } else {
                trace!(node = %root, "prune of undefined node ignored");
                Vec::new()
            }
        };

        for node in &orphans {
            // Commit the removal before the event so handlers observing
            // the store see the node absent. Handlers may mutate the graph
            // re-entrantly, hence the contains re-check.
            {
                let mut inner = self.inner.write();
                if !inner.store.detach(node.as_str()) {
                    continue;
                }
            }
            debug!(node = %node, "pruned");
            self.events.emit(&GraphEvent::Pruned { node: node.clone() });
        }

        if !orphans.is_empty() {
            let mut inner = self.inner.write();
            for node in &orphans {
                if inner.jobs.invalidate_for(node) > 0 {
                    trace!(node = %node, "invalidated pending jobs for pruned node");
                }
            }
        }

        self.evaluate_completion();
    }
}

/// Compute the orphan set for removing `root`, in breadth-first emission
/// order starting at the root. Iterative throughout; deep graphs and long
/// cycles must not recurse.
fn orphan_set(store: &NodeStore, root: &NodeId) -> Vec<NodeId> {
    // Phase 1: the region reachable from the root along dependency edges.
    let mut region: HashSet<NodeId> = HashSet::default();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    region.insert(root.clone());
    queue.push_back(root.clone());
    while let Some(id) = queue.pop_front() {
        if let Some(node) = store.get(&id) {
            for dep in &node.dependencies {
                if region.insert(dep.clone()) {
                    queue.push_back(dep.clone());
                }
            }
        }
    }

    // Phase 2: liveness. Entries survive; so does anything a survivor
    // depends on. Dependents outside the region are survivors by
    // definition. The root never seeds or relays liveness: it is being
    // removed no matter what points at it.
    let mut live: HashSet<NodeId> = HashSet::default();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    for id in &region {
        if id == root {
            continue;
        }
        let Some(node) = store.get(id) else { continue };
        let anchored = node.is_entry
            || node
                .dependents
                .iter()
                .any(|dependent| !region.contains(dependent));
        if anchored && live.insert(id.clone()) {
            queue.push_back(id.clone());
        }
    }
    while let Some(id) = queue.pop_front() {
        if let Some(node) = store.get(&id) {
            for dep in &node.dependencies {
                if dep != root && region.contains(dep) && live.insert(dep.clone()) {
                    queue.push_back(dep.clone());
                }
            }
        }
    }

    // Phase 3: orphans in breadth-first order from the root. Every orphan
    // is reachable from the root through orphans only (a live node on the
    // path would make everything below it live), so this walk visits the
    // entire set.
    let mut orphans = vec![root.clone()];
    let mut seen: HashSet<NodeId> = HashSet::default();
    seen.insert(root.clone());
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    queue.push_back(root.clone());
    while let Some(id) = queue.pop_front() {
        if let Some(node) = store.get(&id) {
            for dep in &node.dependencies {
                if !live.contains(dep) && seen.insert(dep.clone()) {
                    orphans.push(dep.clone());
                    queue.push_back(dep.clone());
                }
            }
        }
    }

    orphans
}
