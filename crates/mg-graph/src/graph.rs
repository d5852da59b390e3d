//! Core graph data structures.

use std::collections::HashMap;

use mg_core::NodeId;

/// A directed dependency graph in adjacency-list form.
///
/// The graph stores:
/// - All nodes in a vector, in the order they were first seen.
/// - A reverse lookup from node ID to its position.
/// - For each node, the positions of its out-neighbors in first-seen order.
///
/// Every node that appears in any edge is present, even when it has no
/// out-edges. Parallel edges collapse to a single adjacency entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    pub(crate) nodes: Vec<NodeId>,
    pub(crate) index: HashMap<NodeId, usize>,

    /// `adjacency[i]` holds the positions of node i's out-neighbors.
    pub(crate) adjacency: Vec<Vec<usize>>,
}

impl DependencyGraph {
    /// Return all nodes in insertion order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges (adjacency entries).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True if `id` appears in the graph.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Position of a node in insertion order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Out-neighbors of a node in first-seen order (None if the node is unknown).
    pub fn neighbors(&self, id: &str) -> Option<impl Iterator<Item = &NodeId> + '_> {
        let idx = self.position(id)?;
        Some(self.adjacency[idx].iter().map(|&m| &self.nodes[m]))
    }

    /// Iterate over `(node, out-neighbors)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, Vec<&NodeId>)> + '_ {
        self.nodes.iter().zip(&self.adjacency).map(|(node, adj)| {
            let targets = adj.iter().map(|&m| &self.nodes[m]).collect();
            (node, targets)
        })
    }

    /// In-degree of every node, indexed by insertion position.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut in_degree = vec![0; self.nodes.len()];
        for adj in &self.adjacency {
            for &m in adj {
                in_degree[m] += 1;
            }
        }
        in_degree
    }

    /// Adjacency by position, for algorithms that work on indices.
    pub(crate) fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;

    #[test]
    fn empty_graph() {
        let graph = DependencyGraph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.in_degrees().is_empty());
        assert!(graph.neighbors("a").is_none());
    }

    #[test]
    fn in_degrees_count_incoming() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("libA", "moduleX");
        builder.add_edge("libB", "moduleX");
        builder.add_edge("moduleX", "app");
        let graph = builder.build();

        // Insertion order: libA, moduleX, libB, app
        assert_eq!(graph.in_degrees(), vec![0, 2, 0, 1]);
    }

    #[test]
    fn iter_pairs_follow_insertion_order() {
        let mut builder = GraphBuilder::new();
        builder.add_edge("a", "b");
        builder.add_edge("a", "c");
        let graph = builder.build();

        let pairs: Vec<(String, Vec<String>)> = graph
            .iter()
            .map(|(n, adj)| {
                (
                    n.to_string(),
                    adj.into_iter().map(ToString::to_string).collect(),
                )
            })
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), vec!["b".to_string(), "c".to_string()]),
                ("b".to_string(), vec![]),
                ("c".to_string(), vec![]),
            ]
        );
    }
}
