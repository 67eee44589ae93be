//! Test suite for skein-graph.
//!
//! Fast deterministic scenario tests live in the sibling modules;
//! property-based invariant tests are in `property_tests.rs` behind the
//! `proptest` feature.

mod event_tests;


use std::sync::Arc;

use parking_lot::Mutex;

use crate::{EventBus, GraphEvent, NodeId, NodeStore};

/// Subscribe a recorder to the bus and return the shared event log.
pub(crate) fn record(bus: &EventBus) -> Arc<Mutex<Vec<GraphEvent>>> {
    let log: Arc<Mutex<Vec<GraphEvent>>> = Arc::default();
    let sink = Arc::clone(&log);
    bus.subscribe(move |event| sink.lock().push(event.clone()));
    log
}

/// Nodes named in `Pruned` events, in emission order.
pub(crate) fn pruned_order(events: &[GraphEvent]) -> Vec<NodeId> {
    events
        .iter()
        .filter_map(|event| match event {
            GraphEvent::Pruned { node } => Some(node.clone()),
            _ => None,
        })
        .collect()
}

/// Count `Complete` events in the log.
pub(crate) fn complete_count(events: &[GraphEvent]) -> usize {
    events
        .iter()
        .filter(|event| matches!(event, GraphEvent::Complete))
        .count()
}

/// Assert the edge-symmetry and closure invariants over a store.
pub(crate) fn assert_store_coherent(store: &NodeStore) {
    for node in store.iter() {
        for dep in &node.dependencies {
            let target = store
                .get(dep)
                .unwrap_or_else(|| panic!("dependency '{dep}' of '{}' missing", node.name));
            assert!(
                target.has_dependent(&node.name),
                "edge {} -> {dep} has no reverse entry",
                node.name
            );
        }
        for dependent in &node.dependents {
            let source = store
                .get(dependent)
                .unwrap_or_else(|| panic!("dependent '{dependent}' of '{}' missing", node.name));
            assert!(
                source.depends_on(&node.name),
                "reverse edge {dependent} -> {} has no forward entry",
                node.name
            );
        }
    }
}
