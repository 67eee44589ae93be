//! End-to-end exercise of the public API: trace a small project, watch the
//! event stream, prune a subtree, and re-trace into the surviving graph.

use std::sync::Arc;

use parking_lot::Mutex;

use skein_core::test_utils::ScriptedResolver;
use skein_core::NodeId;
use skein_graph::{Graph, GraphEvent};

fn recorder(graph: &Graph) -> Arc<Mutex<Vec<GraphEvent>>> {
    let log: Arc<Mutex<Vec<GraphEvent>>> = Arc::default();
    let sink = Arc::clone(&log);
    graph.events().subscribe(move |event| sink.lock().push(event.clone()));
    log
}

#[tokio::test]
async fn trace_prune_retrace_lifecycle() {
    // index -> {app, vendor}, app -> {util, theme}, vendor -> {util}
    let resolver = ScriptedResolver::new()
        .with_dependencies("index", ["app", "vendor"])
        .with_dependencies("app", ["util", "theme"])
        .with_dependencies("vendor", ["util"]);
    let graph = Graph::new(resolver);
    let events = recorder(&graph);

    // First batch: trace the whole project from its entry.
    graph.trace("index").await.unwrap();
    graph.set_node_as_entry("index").unwrap();

    let store = graph.nodes();
    assert_eq!(store.len(), 5);
    assert_eq!(store.edge_count(), 5);
    assert!(store.get("util").unwrap().has_dependent("app"));
    assert!(store.get("util").unwrap().has_dependent("vendor"));

    let stats = graph.statistics();
    assert_eq!(stats.node_count, 5);
    assert_eq!(stats.entry_count, 1);
    assert!(stats.is_idle());

    {
        let events = events.lock();
        assert_eq!(
            events
                .iter()
                .filter(|event| matches!(event, GraphEvent::Traced { .. }))
                .count(),
            5
        );
        assert_eq!(events.last(), Some(&GraphEvent::Complete));
    }

    // Second batch: drop the app subtree. "util" survives through
    // "vendor"; "theme" is orphaned.
    events.lock().clear();
    graph.prune_node("app");

    let store = graph.nodes();
    assert!(!store.contains("app"));
    assert!(!store.contains("theme"));
    assert!(store.contains("util"));
    assert_eq!(
        *events.lock(),
        vec![
            GraphEvent::Pruned {
                node: NodeId::from("app")
            },
            GraphEvent::Pruned {
                node: NodeId::from("theme")
            },
            GraphEvent::Complete,
        ]
    );

    // Third batch: re-trace the pruned subtree back in.
    events.lock().clear();
    graph.trace("app").await.unwrap();

    let store = graph.nodes();
    assert_eq!(store.len(), 5);
    assert!(store.get("app").unwrap().depends_on("theme"));
    // The edge from "index" to "app" is gone: pruning detached it, and
    // nothing has re-resolved "index".
    assert!(!store.get("index").unwrap().depends_on("app"));
    assert_eq!(events.lock().last(), Some(&GraphEvent::Complete));

    // The snapshot grammar survives a round trip through the exports.
    let json = store.to_json().unwrap();
    assert!(json.contains("\"app\""));
    let dot = store.to_dot();
    assert!(dot.contains("\"app\" -> \"theme\";"));
}

#[tokio::test]
async fn batches_complete_independently() {
    let resolver = ScriptedResolver::new().with_dependencies("a", ["b"]);
    let graph = Graph::new(resolver);
    let events = recorder(&graph);

    graph.trace("a").await.unwrap();
    graph.trace("b").await.unwrap();

    let completes = events
        .lock()
        .iter()
        .filter(|event| matches!(event, GraphEvent::Complete))
        .count();
    assert_eq!(completes, 2);
}
