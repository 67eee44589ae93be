//! Trace engine: resolver-driven dependency discovery.
//!
//! `trace_node` only records intent by enqueueing a job; `run_until_idle`
//! is the driver that dispatches jobs to the resolver, multiplexes the
//! in-flight futures, and folds each result into the store as it lands.
//! Results for jobs that were invalidated while the resolver ran are
//! discarded whole: no store mutation, no events.

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, trace};

use skein_core::{NodeId, ResolveResult, Result};

use crate::events::GraphEvent;

use super::Graph;

impl Graph {
    /// Enqueue a resolution job for `id`.
    ///
    /// Unconditional: tracing an already-defined node re-resolves it, and
    /// calling this from an event handler simply appends another job for
    /// the running driver to pick up. The job is not dispatched until
    /// [`Graph::run_until_idle`] runs.
    pub fn trace_node(&self, id: impl Into<NodeId>) {
        let id = id.into();
        debug!(node = %id, "trace job enqueued");
        self.inner.write().jobs.push(id);
    }

    /// Trace `id` and drive the graph to quiescence.
    pub async fn trace(&self, id: impl Into<NodeId>) -> Result<()> {
        self.trace_node(id);
        self.run_until_idle().await
    }

    /// Drive every pending job (and every job discovered along the way)
    /// until no work remains.
    ///
    /// Sibling resolutions interleave freely, but results are applied one
    /// at a time on this task; the only suspension point is the resolver
    /// call itself. Handlers that enqueue further jobs mid-flight extend
    /// the run.
    pub async fn run_until_idle(&self) -> Result<()> {
        let mut in_flight = FuturesUnordered::new();

        loop {
            loop {
                let next = self.inner.write().next_job_to_dispatch();
                let Some(node) = next else { break };

                let resolver = Arc::clone(&self.resolver);
                in_flight.push(async move {
                    let result = resolver.dependencies(&node).await;
                    (node, result)
                });
            }

            match in_flight.next().await {
                Some((node, result)) => self.apply_resolution(node, result)?,
                None => break,
            }
        }

        Ok(())
    }

    /// Fold one resolver result into the graph.
    fn apply_resolution(&self, node: NodeId, result: ResolveResult<Vec<NodeId>>) -> Result<()> {
        // Re-check validity before touching anything: a prune may have
        // obsoleted this job while the resolver was running.
        if !self.inner.read().jobs.is_pending(&node) {
            trace!(node = %node, "discarding resolution for invalidated job");
            return Ok(());
        }

        match result {
            Err(error) => {
                self.inner.write().jobs.consume_first_valid(&node);
                debug!(node = %node, %error, "resolution failed");
                self.events.emit(&GraphEvent::Error { node, error });
            }
            Ok(dependencies) => {
                {
                    let mut inner = self.inner.write();
                    inner.store.ensure_node(&node);

                    for dep in &dependencies {
                        // Capture before installation: a dependency that was
                        // neither defined nor pending is new to the frontier
                        // and needs its own resolution.
                        let known =
                            inner.store.contains(dep) || inner.jobs.is_pending(dep);
                        inner.store.ensure_node(dep);
                        inner.store.link(&node, dep);
                        if !known {
                            trace!(node = %dep, "discovered dependency");
                            inner.jobs.push(dep.clone());
                        }
                    }

                    inner.jobs.consume_first_valid(&node);
                }
                debug!(node = %node, count = dependencies.len(), "traced");
                self.events.emit(&GraphEvent::Traced { node, dependencies });
            }
        }

        self.evaluate_completion();
        Ok(())
    }
}
