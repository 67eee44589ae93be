//! Test utilities for skein crates.
//!
//! Provides [`ScriptedResolver`], a map-backed resolver shared by the unit
//! and integration test suites. It is only compiled for test builds or when
//! the `test-utils` feature is enabled, so it adds nothing to production
//! builds.

use async_trait::async_trait;
use parking_lot::Mutex;
use rustc_hash::FxHashMap as HashMap;

use crate::{NodeId, ResolveError, ResolveResult, Resolver};

/// A resolver scripted from a dependency table.
///
/// Nodes without an entry resolve to an empty dependency list, which keeps
/// leaf-heavy fixtures short. Individual nodes can be scripted to fail
/// instead, and every request is recorded so tests can assert how often a
/// node was resolved.
///
/// # Example
///
/// ```rust,ignore
/// use skein_core::test_utils::ScriptedResolver;
///
/// let resolver = ScriptedResolver::new()
///     .with_dependencies("a", ["b", "c"])
///     .with_failure("broken", "disk on fire");
/// ```
#[derive(Default)]
pub struct ScriptedResolver {
    dependencies: HashMap<NodeId, Vec<NodeId>>,
    failures: HashMap<NodeId, ResolveError>,
    requests: Mutex<Vec<NodeId>>,
}

impl ScriptedResolver {
    /// Create a resolver that answers `[]` for every node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the dependency list for a node.
    pub fn with_dependencies<I, D>(mut self, node: impl Into<NodeId>, deps: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<NodeId>,
    {
        self.dependencies
            .insert(node.into(), deps.into_iter().map(Into::into).collect());
        self
    }

    /// Script a node to fail resolution.
    pub fn with_failure(mut self, node: impl Into<NodeId>, reason: impl Into<String>) -> Self {
        let node = node.into();
        let error = ResolveError::failed(node.clone(), reason);
        self.failures.insert(node, error);
        self
    }

    /// Script a node to fail with a specific error value.
    pub fn with_error(mut self, node: impl Into<NodeId>, error: ResolveError) -> Self {
        self.failures.insert(node.into(), error);
        self
    }

    /// Every node that has been resolved, in request order.
    pub fn requests(&self) -> Vec<NodeId> {
        self.requests.lock().clone()
    }

    /// How many times `node` has been resolved.
    pub fn request_count(&self, node: &NodeId) -> usize {
        self.requests.lock().iter().filter(|n| *n == node).count()
    }
}

#[async_trait]
impl Resolver for ScriptedResolver {
    async fn dependencies(&self, node: &NodeId) -> ResolveResult<Vec<NodeId>> {
        self.requests.lock().push(node.clone());

        if let Some(error) = self.failures.get(node) {
            return Err(error.clone());
        }

        Ok(self.dependencies.get(node).cloned().unwrap_or_default())
    }
}
