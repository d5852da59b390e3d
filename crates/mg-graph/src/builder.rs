//! Incremental graph builder.

use std::collections::{HashMap, HashSet};

use mg_core::{Edge, NodeId};
use tracing::debug;

use crate::graph::DependencyGraph;

/// Builder for constructing a dependency graph incrementally.
///
/// Use `add_edge` (and optionally `add_node`) to build up the graph,
/// then call `build()` to freeze it into an immutable `DependencyGraph`.
/// Nodes are created the first time they are mentioned; there are no
/// error conditions.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<usize>>,
    seen_edges: HashSet<(usize, usize)>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a node exists and return its position.
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> usize {
        let id = id.into();
        if let Some(&idx) = self.index.get(&id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(id.clone(), idx);
        self.nodes.push(id);
        self.adjacency.push(Vec::new());
        idx
    }

    /// Add an edge meaning "`to` depends on `from`".
    ///
    /// Both endpoints are created if new (source first). A repeated edge
    /// keeps its first position in `from`'s neighbor list.
    pub fn add_edge(&mut self, from: impl Into<NodeId>, to: impl Into<NodeId>) {
        let from = self.add_node(from);
        let to = self.add_node(to);
        if self.seen_edges.insert((from, to)) {
            self.adjacency[from].push(to);
        }
    }

    /// Freeze the builder into a graph.
    pub fn build(self) -> DependencyGraph {
        let graph = DependencyGraph {
            nodes: self.nodes,
            index: self.index,
            adjacency: self.adjacency,
        };
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built dependency graph"
        );
        graph
    }
}

impl<E: Into<Edge>> FromIterator<E> for GraphBuilder {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut builder = GraphBuilder::new();
        for edge in iter {
            let Edge { from, to } = edge.into();
            builder.add_edge(from, to);
        }
        builder
    }
}

/// Build a graph from a sequence of edges, processed in input order.
pub fn build_graph(edges: &[Edge]) -> DependencyGraph {
    edges.iter().cloned().collect::<GraphBuilder>().build()
}
