//! Graph-specific error types.

use mg_core::NodeId;
use thiserror::Error;

/// The graph contains at least one cycle, so no topological order exists.
///
/// This is an expected outcome for arbitrary project graphs, not a fault.
/// `remaining` lists the nodes that could not be ordered (cycle members and
/// anything downstream of a cycle) in graph insertion order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("dependency graph contains a cycle among {} node(s): {}", .remaining.len(), join(.remaining))]
pub struct CycleDetected {
    pub remaining: Vec<NodeId>,
}

impl CycleDetected {
    /// True if `id` is among the nodes left unordered.
    pub fn involves(&self, id: &str) -> bool {
        self.remaining.iter().any(|n| n.as_str() == id)
    }
}

fn join(nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(NodeId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
