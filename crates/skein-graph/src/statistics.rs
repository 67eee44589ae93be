use serde::Serialize;

/// Aggregate counters for a graph at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStatistics {
    /// Nodes currently in the store.
    pub node_count: usize,
    /// Directed edges currently in the store.
    pub edge_count: usize,
    /// Nodes marked as entries.
    pub entry_count: usize,
    /// Jobs ever enqueued, consumed and invalidated included.
    pub total_jobs: usize,
    /// Jobs still awaiting resolution.
    pub valid_jobs: usize,
}

impl GraphStatistics {
    /// True when no resolution work is outstanding.
    pub fn is_idle(&self) -> bool {
        self.valid_jobs == 0
    }
}
