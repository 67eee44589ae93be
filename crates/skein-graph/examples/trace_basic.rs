//! Trace a tiny module graph, then prune a subtree and print what's left.
//!
//! Run with: cargo run --example trace_basic

use skein_core::test_utils::ScriptedResolver;
use skein_graph::{Graph, GraphEvent};

#[tokio::main(flavor = "current_thread")]
async fn main() -> skein_core::Result<()> {
    let resolver = ScriptedResolver::new()
        .with_dependencies("index", ["app", "vendor"])
        .with_dependencies("app", ["util"])
        .with_dependencies("vendor", ["util"]);

    let graph = Graph::new(resolver);
    graph.events().subscribe(|event| match event {
        GraphEvent::Traced { node, dependencies } => {
            println!("traced  {node} -> {dependencies:?}");
        }
        GraphEvent::Pruned { node } => println!("pruned  {node}"),
        GraphEvent::Error { node, error } => println!("error   {node}: {error}"),
        GraphEvent::Complete => println!("complete"),
    });

    graph.trace("index").await?;
    graph.set_node_as_entry("index")?;

    graph.prune_node("app");

    println!("\nsurviving graph:\n{}", graph.nodes().to_dot());
    Ok(())
}
