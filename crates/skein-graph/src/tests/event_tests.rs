//! Event bus behavior: ordering, re-entrancy, payloads.

use std::sync::Arc;

use parking_lot::Mutex;

use skein_core::test_utils::ScriptedResolver;
use skein_core::NodeId;

use crate::{Graph, GraphEvent};

use super::record;

fn graph_from(notation: &str) -> Graph {
    Graph::from_notation(notation, ScriptedResolver::new()).unwrap()
}

#[test]
fn subscribers_receive_events_in_registration_order() {
    let graph = graph_from("a");
    let log: Arc<Mutex<Vec<&'static str>>> = Arc::default();

    let first = Arc::clone(&log);
    graph.events().subscribe(move |event| {
        if matches!(event, GraphEvent::Pruned { .. }) {
            first.lock().push("first");
        }
    });
    let second = Arc::clone(&log);
    graph.events().subscribe(move |event| {
        if matches!(event, GraphEvent::Pruned { .. }) {
            second.lock().push("second");
        }
    });

    graph.prune_node("a");

    assert_eq!(*log.lock(), vec!["first", "second"]);
}

#[test]
fn handlers_may_subscribe_more_handlers() {
    let graph = graph_from("a -> b");
    let late_events = Arc::new(Mutex::new(Vec::new()));

    let bus = graph.events().clone();
    let sink = Arc::clone(&late_events);
    graph.events().subscribe(move |event| {
        if matches!(event, GraphEvent::Pruned { node } if node == "a") {
            // Subscribing from inside a handler must neither deadlock nor
            // affect delivery of the event being handled.
            let sink = Arc::clone(&sink);
            bus.subscribe(move |event| sink.lock().push(event.clone()));
        }
    });

    graph.prune_node("a");

    // The late subscriber saw everything after the event that created it:
    // the prune of "b" and the completion.
    let late = late_events.lock();
    assert_eq!(
        *late,
        vec![
            GraphEvent::Pruned {
                node: NodeId::from("b")
            },
            GraphEvent::Complete,
        ]
    );
}

#[test]
fn handlers_may_prune_re_entrantly() {
    let graph = graph_from(
        "
        a
        x
        ",
    );
    let events = record(graph.events());

    let inner = graph.clone();
    graph.events().subscribe(move |event| {
        if matches!(event, GraphEvent::Pruned { node } if node == "a") {
            inner.prune_node("x");
        }
    });

    graph.prune_node("a");

    assert!(graph.nodes().is_empty());
    let events = events.lock();
    // The nested prune is delivered re-entrantly, inside the outer one.
    assert_eq!(events[0], GraphEvent::Pruned { node: NodeId::from("a") });
    assert_eq!(events[1], GraphEvent::Pruned { node: NodeId::from("x") });
    assert!(events.iter().all(|event| !matches!(
        event,
        GraphEvent::Traced { .. } | GraphEvent::Error { .. }
    )));
}

#[test]
fn event_payloads_compare_by_value() {
    let traced = GraphEvent::Traced {
        node: NodeId::from("a"),
        dependencies: vec![NodeId::from("b")],
    };
    assert_eq!(
        traced,
        GraphEvent::Traced {
            node: NodeId::from("a"),
            dependencies: vec![NodeId::from("b")],
        }
    );
    assert_ne!(
        traced,
        GraphEvent::Traced {
            node: NodeId::from("a"),
            dependencies: vec![],
        }
    );
    assert_eq!(traced.node(), Some(&NodeId::from("a")));
    assert_eq!(GraphEvent::Complete.node(), None);
}

#[test]
fn cloned_buses_share_subscribers() {
    let graph = graph_from("a");
    let clone = graph.events().clone();
    let events = record(&clone);

    graph.prune_node("a");

    assert_eq!(clone.subscriber_count(), graph.events().subscriber_count());
    assert!(!events.lock().is_empty());
}
