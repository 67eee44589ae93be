//! Snapshot exports for tooling.
//!
//! Both formats are deterministic: nodes are sorted lexicographically and
//! edges keep their install order, so exports diff cleanly across runs.

use crate::node::Node;
use crate::store::NodeStore;

impl NodeStore {
    /// Render the store as a Graphviz digraph. Entry nodes are drawn with
    /// a doubled outline.
    pub fn to_dot(&self) -> String {
        let mut ids: Vec<_> = self.ids().collect();
        ids.sort();

        let mut out = String::from("digraph skein {\n");
        for id in &ids {
            let Some(node) = self.get(id) else { continue };
            if node.is_entry {
                out.push_str(&format!("  \"{id}\" [peripheries=2];\n"));
            } else {
                out.push_str(&format!("  \"{id}\";\n"));
            }
        }
        for id in &ids {
            let Some(node) = self.get(id) else { continue };
            for dep in &node.dependencies {
                out.push_str(&format!("  \"{id}\" -> \"{dep}\";\n"));
            }
        }
        out.push_str("}\n");
        out
    }

    /// Serialize the store as a JSON array of nodes, sorted by name.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut nodes: Vec<&Node> = self.iter().collect();
        nodes.sort_by(|a, b| a.name.cmp(&b.name));
        serde_json::to_string_pretty(&nodes)
    }
}
