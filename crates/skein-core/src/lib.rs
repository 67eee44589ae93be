//! # skein-core
//!
//! Skein core crate - shared identifiers, resolver abstraction, and error
//! types.
//!
//! This crate provides the foundation types that other skein crates depend
//! on. It contains no graph logic and no dependencies on other skein
//! crates, breaking the cyclic dependency chain: `skein-graph` consumes
//! the [`Resolver`] trait defined here, while hosts implement it against
//! whatever module system they are tracing.

pub mod node_id;
pub mod resolver;

// Test utilities (available in test builds and when the test-utils feature
// is enabled).
#[cfg(any(test, doctest, feature = "test-utils"))]
pub mod test_utils;

pub use node_id::NodeId;
pub use resolver::{ResolveError, ResolveResult, Resolver};

/// Error types for skein graph operations.
///
/// Structural misuse (duplicate creation, unknown nodes, dangling edge
/// endpoints) fails synchronously with one of these variants. Resolver
/// failures are *not* routed through here during tracing - they are
/// reported on the event stream so that tracing of sibling nodes can
/// continue.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A node with this identifier is already present in the store.
    #[error("node '{0}' is already defined")]
    DuplicateNode(NodeId),

    /// The operation requires a node that is not present in the store.
    #[error("node '{0}' is not defined")]
    UnknownNode(NodeId),

    /// An edge endpoint is missing from the store.
    #[error("cannot add edge '{head}' -> '{tail}': node '{missing}' is not defined")]
    MissingEndpoint {
        head: NodeId,
        tail: NodeId,
        missing: NodeId,
    },

    /// Resolver failure surfaced through a synchronous entry point.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Result type alias for skein operations.
pub type Result<T> = std::result::Result<T, Error>;
