//! Edge sorting: the composition of graph building and topological ordering.

use std::cmp::Reverse;

use mg_core::Edge;
use tracing::warn;

use crate::builder::build_graph;
use crate::error::CycleDetected;
use crate::order::{Order, topological_order};

/// Result of sorting an edge list, with the cycle report when the fallback
/// (original order) was used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedEdges {
    pub edges: Vec<Edge>,
    pub cycle: Option<CycleDetected>,
}

impl SortedEdges {
    /// True if the edges were reordered by a topological order.
    pub fn is_ordered(&self) -> bool {
        self.cycle.is_none()
    }
}

/// Sort edges by descending rank of their `from` node.
///
/// Falls back to the input order when the edges contain a cycle. The output
/// always has the same length and the same edges as the input.
pub fn sort_edges(edges: &[Edge]) -> Vec<Edge> {
    sort_edges_report(edges).edges
}

/// Like [`sort_edges`], but also reports whether a cycle forced the fallback.
pub fn sort_edges_report(edges: &[Edge]) -> SortedEdges {
    let graph = build_graph(edges);
    match topological_order(&graph) {
        Ok(order) => SortedEdges {
            edges: sort_by_rank(edges, &order),
            cycle: None,
        },
        Err(cycle) => {
            warn!(%cycle, "keeping original edge order");
            SortedEdges {
                edges: edges.to_vec(),
                cycle: Some(cycle),
            }
        }
    }
}

/// Stable sort by descending `from` rank; equal ranks keep input order.
fn sort_by_rank(edges: &[Edge], order: &Order) -> Vec<Edge> {
    let mut sorted = edges.to_vec();
    // Every `from` is a graph node, so every rank is present.
    sorted.sort_by_key(|edge| Reverse(order.rank(edge.from.as_str())));
    sorted
}
