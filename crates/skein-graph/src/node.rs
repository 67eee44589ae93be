use serde::{Deserialize, Serialize};

use skein_core::NodeId;

/// A vertex in the dependency graph.
///
/// Edge lists are insertion-ordered and duplicate-free: the store inserts
/// idempotently, and the order dependencies were installed in is the order
/// traversals and prune events observe. The `name` duplicates the store
/// key for ergonomics when nodes travel without their map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: NodeId,
    /// Nodes this node points at.
    pub dependencies: Vec<NodeId>,
    /// Nodes pointing at this node.
    pub dependents: Vec<NodeId>,
    /// Entry nodes are anchored: transitive pruning never removes them.
    pub is_entry: bool,
}

impl Node {
    /// Create a fresh node with no edges.
    pub fn new(name: impl Into<NodeId>) -> Self {
        Self {
            name: name.into(),
            dependencies: Vec::new(),
            dependents: Vec::new(),
            is_entry: false,
        }
    }

    /// True if this node has an edge to `id`.
    pub fn depends_on(&self, id: impl AsRef<str>) -> bool {
        let id = id.as_ref();
        self.dependencies.iter().any(|dep| dep.as_str() == id)
    }

    /// True if `id` has an edge to this node.
    pub fn has_dependent(&self, id: impl AsRef<str>) -> bool {
        let id = id.as_ref();
        self.dependents.iter().any(|dep| dep.as_str() == id)
    }
}
