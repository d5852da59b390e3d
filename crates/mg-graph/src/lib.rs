//! mg-graph: dependency-graph ordering engine for modgraph.
//!
//! Provides:
//! - Adjacency-list dependency graph and an incremental builder
//! - Topological ordering via Kahn's algorithm with cycle detection
//! - Edge sorting by the rank of each edge's source node
//!
//! # Example
//!
//! ```
//! use mg_core::Edge;
//! use mg_graph::sort_edges;
//!
//! let edges = vec![
//!     Edge::new("libA", "moduleX"),
//!     Edge::new("libB", "moduleX"),
//!     Edge::new("moduleX", "app"),
//! ];
//! let sorted = sort_edges(&edges);
//!
//! assert_eq!(sorted[0], Edge::new("moduleX", "app"));
//! assert_eq!(sorted.len(), edges.len());
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod order;
pub mod sort;

// Re-exports for ergonomics
pub use builder::{GraphBuilder, build_graph};
pub use error::CycleDetected;
pub use graph::DependencyGraph;
pub use order::{Order, topological_order};
pub use sort::{SortedEdges, sort_edges, sort_edges_report};
