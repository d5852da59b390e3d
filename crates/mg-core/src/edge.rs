//! Directed dependency edges.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ids::NodeId;

/// A dependency edge: `to` depends on `from`.
///
/// `from` is the dependency (library or upstream module) and `to` is the
/// module that consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    /// The dependency.
    pub from: NodeId,
    /// The dependent.
    pub to: NodeId,
}

impl Edge {
    /// Create a new edge from `from` (dependency) to `to` (dependent).
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// True if the edge starts and ends at the same node.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl<F, T> From<(F, T)> for Edge
where
    F: Into<NodeId>,
    T: Into<NodeId>,
{
    fn from((from, to): (F, T)) -> Self {
        Self::new(from, to)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
