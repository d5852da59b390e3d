//! Topological ordering (Kahn's algorithm).
//!
//! The worklist is a stack: the most recently released node is emitted next,
//! and a node's out-neighbors are consumed from the back of its list. Both
//! choices fix which of several valid orders is produced, so the output is a
//! deterministic function of edge insertion order.

use std::collections::HashMap;

use mg_core::NodeId;
use tracing::debug;

use crate::error::CycleDetected;
use crate::graph::DependencyGraph;

/// A topological order: the emitted node sequence and each node's rank in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    sequence: Vec<NodeId>,
    ranks: HashMap<NodeId, usize>,
}

impl Order {
    fn from_sequence(sequence: Vec<NodeId>) -> Self {
        let ranks = sequence
            .iter()
            .enumerate()
            .map(|(rank, id)| (id.clone(), rank))
            .collect();
        Self { sequence, ranks }
    }

    /// Nodes in emission order.
    pub fn sequence(&self) -> &[NodeId] {
        &self.sequence
    }

    /// Zero-based rank of a node (None if the node is not in the order).
    pub fn rank(&self, id: &str) -> Option<usize> {
        self.ranks.get(id).copied()
    }

    /// The node → rank mapping.
    pub fn ranks(&self) -> &HashMap<NodeId, usize> {
        &self.ranks
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Consume the order and return the emitted sequence.
    pub fn into_sequence(self) -> Vec<NodeId> {
        self.sequence
    }
}

/// Per-call scratch state for Kahn's algorithm.
///
/// Holds its own copy of the adjacency lists so the caller's graph is never
/// touched. Lists are drained as nodes are consumed.
struct WorkingGraph {
    adjacency: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
    removed: Vec<bool>,
}

impl WorkingGraph {
    fn new(graph: &DependencyGraph) -> Self {
        Self {
            adjacency: graph.adjacency().to_vec(),
            in_degree: graph.in_degrees(),
            removed: vec![false; graph.node_count()],
        }
    }

    /// Remove `n`, releasing any neighbor whose in-degree drops to zero.
    fn remove(&mut self, n: usize, worklist: &mut Vec<usize>) {
        while let Some(m) = self.adjacency[n].pop() {
            self.in_degree[m] -= 1;
            if self.in_degree[m] == 0 {
                worklist.push(m);
            }
        }
        self.removed[n] = true;
    }

    fn remaining(&self) -> impl Iterator<Item = usize> + '_ {
        self.removed
            .iter()
            .enumerate()
            .filter(|(_, removed)| !**removed)
            .map(|(idx, _)| idx)
    }
}

/// Compute a topological order of `graph`.
///
/// Returns `CycleDetected` when any node cannot be emitted because it sits on,
/// or behind, a cycle. Self-loops count as cycles.
pub fn topological_order(graph: &DependencyGraph) -> Result<Order, CycleDetected> {
    let mut working = WorkingGraph::new(graph);

    let mut worklist: Vec<usize> = working
        .in_degree
        .iter()
        .enumerate()
        .filter(|(_, deg)| **deg == 0)
        .map(|(idx, _)| idx)
        .collect();

    let mut sequence = Vec::with_capacity(graph.node_count());
    while let Some(n) = worklist.pop() {
        sequence.push(graph.nodes[n].clone());
        working.remove(n, &mut worklist);
    }

    if sequence.len() != graph.node_count() {
        let remaining: Vec<NodeId> = working
            .remaining()
            .map(|idx| graph.nodes[idx].clone())
            .collect();
        debug!(
            ordered = sequence.len(),
            unordered = remaining.len(),
            "cycle detected"
        );
        return Err(CycleDetected { remaining });
    }

    debug!(nodes = sequence.len(), "computed topological order");
    Ok(Order::from_sequence(sequence))
}
