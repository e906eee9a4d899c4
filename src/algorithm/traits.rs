use serde::Serialize;
use std::collections::BTreeMap;

use crate::graph::{NodeId, WeightedGraph};
use crate::Result;

/// Best known route to one node: total distance from the origin and the node
/// that precedes it on that route
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathData {
    /// Total weight of the shortest known path from the origin
    pub distance: f64,

    /// Previous node on that path; `None` only for the origin
    pub predecessor: Option<NodeId>,
}

/// Result of one shortest path computation
///
/// Holds a [`PathData`] record for every node reachable from the origin and
/// nothing else. The origin always has a record with distance 0 and no
/// predecessor.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    origin: NodeId,
    paths: BTreeMap<NodeId, PathData>,
}

impl ShortestPaths {
    /// Starts a table containing only the origin record
    pub(crate) fn new(origin: NodeId) -> Self {
        let mut paths = BTreeMap::new();
        paths.insert(
            origin,
            PathData {
                distance: 0.0,
                predecessor: None,
            },
        );
        ShortestPaths { origin, paths }
    }

    pub(crate) fn record(&mut self, node: NodeId, data: PathData) {
        self.paths.insert(node, data);
    }

    pub(crate) fn get_mut(&mut self, node: NodeId) -> Option<&mut PathData> {
        self.paths.get_mut(&node)
    }

    /// Source node of the computation
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// All records, keyed by node
    pub fn paths(&self) -> &BTreeMap<NodeId, PathData> {
        &self.paths
    }

    /// Record for `node`, if it is reachable
    pub fn get(&self, node: NodeId) -> Option<&PathData> {
        self.paths.get(&node)
    }

    /// Number of reachable nodes, origin included
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Always false: the origin is reachable from itself
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.paths.contains_key(&node)
    }

    /// Length of the shortest path to `destination`, or `f64::INFINITY` if it
    /// cannot be reached
    pub fn shortest_path_length(&self, destination: NodeId) -> f64 {
        self.paths
            .get(&destination)
            .map_or(f64::INFINITY, |data| data.distance)
    }

    /// Nodes along the shortest path from the origin to `destination`, both
    /// ends included. The origin appears once even when it is the destination.
    /// Returns an empty vector if `destination` cannot be reached.
    pub fn shortest_path(&self, destination: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = match self.paths.get(&destination) {
            Some(_) => Some(destination),
            None => return path,
        };

        while let Some(node) = current {
            path.push(node);
            // Predecessors form a tree rooted at the origin
            current = self.paths.get(&node).and_then(|data| data.predecessor);
        }

        path.reverse();
        path
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm {
    /// Compute shortest paths from `origin` to every reachable node
    fn compute_shortest_paths<G: WeightedGraph>(
        &self,
        graph: &G,
        origin: NodeId,
    ) -> Result<ShortestPaths>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
