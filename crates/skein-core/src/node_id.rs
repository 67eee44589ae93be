use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque identifier for a node in the dependency graph.
///
/// Identifiers have value equality and are compared as plain strings; the
/// engine attaches no meaning to their contents, so hosts are free to use
/// file paths, virtual module specifiers, or anything else with a stable
/// textual form. The inner `Arc<str>` makes cloning cheap, which matters
/// because ids fan out into dependency lists, reverse edges, job queues,
/// and event payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(Arc<str>);

impl NodeId {
    /// Create a node identifier from anything string-shaped.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&NodeId> for NodeId {
    fn from(id: &NodeId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

// Serialize as a bare string so exports and fixtures stay readable.
impl Serialize for NodeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_equality() {
        let a = NodeId::from("src/index.ts");
        let b = NodeId::from(String::from("src/index.ts"));
        assert_eq!(a, b);
        assert_eq!(a, "src/index.ts");
        assert_ne!(a, NodeId::from("src/other.ts"));
    }

    #[test]
    fn display_matches_contents() {
        let id = NodeId::from("virtual:entry");
        assert_eq!(id.to_string(), "virtual:entry");
        assert_eq!(id.as_str(), "virtual:entry");
    }

    #[test]
    fn serde_round_trip_is_a_bare_string() {
        let id = NodeId::from("a");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"a\"");
        let back: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
