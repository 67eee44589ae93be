//! # skein-graph
//!
//! Incremental module dependency graph engine.
//!
//! This crate is the heart of a build tracer: given one or more entry
//! nodes, it asks a host-provided [`Resolver`] to enumerate each node's
//! direct dependencies, installs the resulting edges, and signals when the
//! currently-reachable frontier has been fully resolved. It also supports
//! pruning - removing a node and every dependency that transitively loses
//! all dependents - while tolerating cycles and invalidating in-flight
//! resolution work that no longer matters.
//!
//! ## Overview
//!
//! - **Pure Data Structures**: nodes carry identities and edges only, no
//!   file contents and no I/O
//! - **Resolver-Driven**: the engine never parses sources; hosts implement
//!   [`Resolver`] against their module system
//! - **Cycle-Safe Pruning**: orphaned subgraphs collapse even when they
//!   contain dependency cycles, and entry nodes anchor what must survive
//! - **Observable**: every mutation is reported on the [`EventBus`] as a
//!   `traced`, `pruned`, `error`, or `complete` event
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Graph                                │
//! │        (Arc-based facade, cheap to clone and share)         │
//! └──────────┬──────────────────┬──────────────────┬────────────┘
//!            │                  │                  │
//!            ▼                  ▼                  ▼
//!      ┌───────────┐     ┌─────────────┐    ┌───────────┐
//!      │ NodeStore │     │ PendingJobs │    │ EventBus  │
//!      │ (snapshot)│     │ (job queue) │    │ (4 kinds) │
//!      └───────────┘     └─────────────┘    └───────────┘
//!            ▲                  ▲
//!            │                  │
//!      ┌─────┴──────────────────┴─────┐
//!      │   trace engine / prune engine │
//!      │   (driven by dyn Resolver)    │
//!      └──────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use skein_graph::Graph;
//! use skein_core::{NodeId, ResolveResult, Resolver};
//!
//! struct MyResolver;
//!
//! #[async_trait::async_trait]
//! impl Resolver for MyResolver {
//!     async fn dependencies(&self, node: &NodeId) -> ResolveResult<Vec<NodeId>> {
//!         // Parse the module behind `node` and return what it imports.
//!         Ok(Vec::new())
//!     }
//! }
//!
//! # async fn run() -> skein_core::Result<()> {
//! let graph = Graph::new(MyResolver);
//! graph.events().subscribe(|event| println!("{event:?}"));
//! graph.trace("src/index.ts").await?;
//! graph.prune_node("src/legacy.ts");
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! [`Graph`] shares its state behind an `Arc`; clones observe the same
//! graph. All mutations land on the task driving [`Graph::run_until_idle`],
//! interleaved only at resolver boundaries, so resolvers may fan work out
//! internally without coordinating with the engine.

pub mod events;
pub mod jobs;
pub mod node;
pub mod notation;
pub mod statistics;
pub mod store;

mod export;
mod graph;

pub use events::{EventBus, GraphEvent};
pub use graph::Graph;
pub use jobs::{Job, PendingJobs};
pub use node::Node;
pub use notation::NotationError;
pub use statistics::GraphStatistics;
pub use store::NodeStore;

// Re-export foundation types for downstream convenience.
pub use skein_core::{Error, NodeId, ResolveError, ResolveResult, Resolver, Result};

#[cfg(test)]
mod tests;
