//! Text notation for node stores.
//!
//! Each line declares either a bare node (`a`) or a chain of edges
//! (`a -> b -> c`, shorthand for `a -> b` plus `b -> c`). Endpoints are
//! created on first mention, lines are trimmed, and blank lines are
//! ignored. The notation is used by tests and tooling to spell out graph
//! fixtures; entry markings are not part of the grammar and are applied
//! separately.

use thiserror::Error;

use skein_core::NodeId;

use crate::store::NodeStore;

/// Error for malformed notation input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// A line contains an arrow with nothing on one side, e.g. `a ->`.
    #[error("line {line}: empty node name in '{text}'")]
    EmptyName { line: usize, text: String },
}

/// Parse notation text into a node store.
pub fn parse(text: &str) -> Result<NodeStore, NotationError> {
    let mut store = NodeStore::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let mut previous: Option<NodeId> = None;
        for segment in line.split("->") {
            let name = segment.trim();
            if name.is_empty() {
                return Err(NotationError::EmptyName {
                    line: index + 1,
                    text: line.to_string(),
                });
            }
            let id = NodeId::from(name);
            store.ensure_node(&id);
            if let Some(head) = previous {
                store.link(&head, &id);
            }
            previous = Some(id);
        }
    }

    Ok(store)
}

/// Render a store back into notation, deterministically.
///
/// Nodes are emitted in lexicographic order; a node with edges appears
/// once per outgoing edge (in install order), while fully isolated nodes
/// get a bare-name line. Entry flags are not representable and are
/// dropped.
pub fn render(store: &NodeStore) -> String {
    let mut ids: Vec<&NodeId> = store.ids().collect();
    ids.sort();

    let mut out = String::new();
    for id in ids {
        let Some(node) = store.get(id) else { continue };
        if node.dependencies.is_empty() && node.dependents.is_empty() {
            out.push_str(id.as_str());
            out.push('\n');
        } else {
            for dep in &node.dependencies {
                out.push_str(id.as_str());
                out.push_str(" -> ");
                out.push_str(dep.as_str());
                out.push('\n');
            }
        }
    }
    out
}
