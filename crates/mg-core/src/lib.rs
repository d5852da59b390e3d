//! mg-core: shared vocabulary for modgraph.
//!
//! Contains:
//! - ids (opaque module identifiers)
//! - edge (directed dependency edges between modules)

pub mod edge;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use edge::Edge;
pub use ids::NodeId;
