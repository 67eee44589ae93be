//! Node store: the graph's node and edge state.
//!
//! `NodeStore` is a snapshot value: `Clone` produces an independent view
//! that keeps observing the graph as it was, while the engine continues
//! mutating its own copy. Nodes are shared structurally through `Arc` and
//! edited copy-on-write, so snapshots are cheap even for large graphs.

use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;

use skein_core::{Error, NodeId, Result};

use crate::node::Node;
use crate::notation::{self, NotationError};

/// Mapping from node id to node, maintaining edge symmetry.
///
/// Invariants upheld by construction:
/// - `b ∈ nodes[a].dependencies ⇔ a ∈ nodes[b].dependents`
/// - every edge endpoint is present in the store
#[derive(Debug, Clone, Default)]
pub struct NodeStore {
    nodes: HashMap<NodeId, Arc<Node>>,
}

impl NodeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from the `a` / `a -> b` text notation.
    pub fn from_notation(text: &str) -> std::result::Result<Self, NotationError> {
        notation::parse(text)
    }

    /// Number of nodes in the store.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the store holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True if a node with this id is present.
    pub fn contains(&self, id: impl AsRef<str>) -> bool {
        self.nodes.contains_key(id.as_ref())
    }

    /// Fetch a node by id.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&Node> {
        self.nodes.get(id.as_ref()).map(Arc::as_ref)
    }

    /// Iterate over all nodes, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values().map(Arc::as_ref)
    }

    /// Iterate over all node ids, in unspecified order.
    pub fn ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes
            .values()
            .map(|node| node.dependencies.len())
            .sum()
    }

    /// Add a node with no edges. Fails if the id is already present.
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> Result<()> {
        let id = id.into();
        if self.nodes.contains_key(id.as_str()) {
            return Err(Error::DuplicateNode(id));
        }
        self.nodes.insert(id.clone(), Arc::new(Node::new(id)));
        Ok(())
    }

    /// Remove a node, detaching all of its edges. Fails if absent.
    pub fn remove_node(&mut self, id: impl AsRef<str>) -> Result<()> {
        if !self.detach(id.as_ref()) {
            return Err(Error::UnknownNode(NodeId::from(id.as_ref())));
        }
        Ok(())
    }

    /// Add the edge `head -> tail`. Both endpoints must exist; adding an
    /// existing edge is a no-op.
    pub fn add_edge(&mut self, head: impl Into<NodeId>, tail: impl Into<NodeId>) -> Result<()> {
        let head = head.into();
        let tail = tail.into();
        if let Some(missing) = self.missing_endpoint(&head, &tail) {
            return Err(Error::MissingEndpoint {
                head,
                tail,
                missing,
            });
        }
        self.link(&head, &tail);
        Ok(())
    }

    /// Remove the edge `head -> tail`. Both endpoints must exist; removing
    /// an absent edge is a no-op.
    pub fn remove_edge(&mut self, head: impl Into<NodeId>, tail: impl Into<NodeId>) -> Result<()> {
        let head = head.into();
        let tail = tail.into();
        if let Some(missing) = self.missing_endpoint(&head, &tail) {
            return Err(Error::MissingEndpoint {
                head,
                tail,
                missing,
            });
        }
        if let Some(node) = self.nodes.get_mut(head.as_str()) {
            Arc::make_mut(node).dependencies.retain(|dep| dep != &tail);
        }
        if let Some(node) = self.nodes.get_mut(tail.as_str()) {
            Arc::make_mut(node).dependents.retain(|dep| dep != &head);
        }
        Ok(())
    }

    /// Flip the entry flag on a node. Fails if absent; idempotent otherwise.
    pub fn set_entry(&mut self, id: impl AsRef<str>, is_entry: bool) -> Result<()> {
        match self.nodes.get_mut(id.as_ref()) {
            Some(node) => {
                if node.is_entry != is_entry {
                    Arc::make_mut(node).is_entry = is_entry;
                }
                Ok(())
            }
            None => Err(Error::UnknownNode(NodeId::from(id.as_ref()))),
        }
    }

    fn missing_endpoint(&self, head: &NodeId, tail: &NodeId) -> Option<NodeId> {
        if !self.nodes.contains_key(head.as_str()) {
            Some(head.clone())
        } else if !self.nodes.contains_key(tail.as_str()) {
            Some(tail.clone())
        } else {
            None
        }
    }

    /// Insert a node if absent. Returns true when a node was created.
    pub(crate) fn ensure_node(&mut self, id: &NodeId) -> bool {
        if self.nodes.contains_key(id.as_str()) {
            return false;
        }
        self.nodes
            .insert(id.clone(), Arc::new(Node::new(id.clone())));
        true
    }

    /// Install `head -> tail` between nodes known to exist, idempotently.
    pub(crate) fn link(&mut self, head: &NodeId, tail: &NodeId) {
        if let Some(node) = self.nodes.get_mut(head.as_str()) {
            if !node.depends_on(tail) {
                Arc::make_mut(node).dependencies.push(tail.clone());
            }
        }
        if let Some(node) = self.nodes.get_mut(tail.as_str()) {
            if !node.has_dependent(head) {
                Arc::make_mut(node).dependents.push(head.clone());
            }
        }
    }

    /// Remove a node and detach its edges from every neighbor. Returns
    /// false when the node is absent.
    pub(crate) fn detach(&mut self, id: &str) -> bool {
        let Some(removed) = self.nodes.remove(id) else {
            return false;
        };

        for dep in &removed.dependencies {
            if let Some(node) = self.nodes.get_mut(dep.as_str()) {
                Arc::make_mut(node)
                    .dependents
                    .retain(|d| d != &removed.name);
            }
        }
        for dependent in &removed.dependents {
            if let Some(node) = self.nodes.get_mut(dependent.as_str()) {
                Arc::make_mut(node)
                    .dependencies
                    .retain(|d| d != &removed.name);
            }
        }
        true
    }
}
