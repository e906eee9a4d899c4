use serde::Serialize;
use std::fmt::{self, Debug};

/// Stable handle to a node inside the graph that created it
///
/// Handles are plain indices into the graph's node arena, so path records can
/// point back at their predecessor without borrowing the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in creation order
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Trait representing a weighted directed graph the shortest path engine can read
pub trait WeightedGraph: Debug {
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns true if the handle refers to a node of this graph
    fn contains(&self, node: NodeId) -> bool;

    /// Returns an iterator over the outgoing edges of a node
    fn neighbors(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, f64)> + '_>;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.neighbors(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }
}
