//! Resolver abstraction.
//!
//! The graph engine never reads files or parses sources itself; it asks a
//! host-provided [`Resolver`] for the direct dependencies of a node and
//! folds the answer into the graph. Resolvers may answer immediately or
//! after arbitrary asynchronous work - the engine only assumes that each
//! request produces exactly one result.

use async_trait::async_trait;

use crate::NodeId;

/// Error produced by a [`Resolver`].
///
/// Resolver errors ride on the graph's event stream, so the type is
/// cloneable and comparable rather than carrying source errors by
/// reference. Hosts that need richer diagnostics should log them on their
/// side of the resolver boundary and surface a summary here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The node does not exist in the host's module system.
    #[error("node '{0}' was not found")]
    NotFound(NodeId),

    /// Dependency enumeration failed for a host-specific reason.
    #[error("failed to resolve '{node}': {reason}")]
    Failed { node: NodeId, reason: String },
}

impl ResolveError {
    /// Convenience constructor for host-specific failures.
    pub fn failed(node: impl Into<NodeId>, reason: impl Into<String>) -> Self {
        Self::Failed {
            node: node.into(),
            reason: reason.into(),
        }
    }

    /// The node the failure is attributed to.
    pub fn node(&self) -> &NodeId {
        match self {
            Self::NotFound(node) => node,
            Self::Failed { node, .. } => node,
        }
    }
}

/// Result type alias for resolver operations.
pub type ResolveResult<T> = std::result::Result<T, ResolveError>;

/// Enumerates the direct dependencies of a node.
///
/// Implementations are queried once per pending trace job and must return
/// the dependency list in the order it should be installed; the engine
/// preserves that order in the store and in `traced` event payloads.
/// Synchronous resolvers are simply futures that are already ready.
///
/// The engine applies results on a single logical execution context, so
/// implementations may resolve in parallel internally without taking any
/// locks shared with the graph.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Enumerate the direct dependencies of `node`, in install order.
    async fn dependencies(&self, node: &NodeId) -> ResolveResult<Vec<NodeId>>;
}

#[async_trait]
impl<T: Resolver + ?Sized> Resolver for std::sync::Arc<T> {
    async fn dependencies(&self, node: &NodeId) -> ResolveResult<Vec<NodeId>> {
        (**self).dependencies(node).await
    }
}
