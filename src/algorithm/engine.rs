use crate::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPaths};
use crate::graph::{Graph, NodeId, WeightedGraph};
use crate::{Error, Result};

/// Stateful front end that remembers the most recent computation
///
/// Each call to [`compute`](Self::compute) discards the previous table before
/// running. Queries made before any successful computation fail with
/// [`Error::NotComputed`], which keeps "nothing computed" apart from a
/// computation that reached only the origin.
#[derive(Debug, Default)]
pub struct ShortestPathEngine<A = Dijkstra> {
    algorithm: A,
    last: Option<ShortestPaths>,
}

impl ShortestPathEngine<Dijkstra> {
    /// Creates an engine backed by [`Dijkstra`]
    pub fn new() -> Self {
        Self::with_algorithm(Dijkstra::new())
    }
}

impl<A: ShortestPathAlgorithm> ShortestPathEngine<A> {
    pub fn with_algorithm(algorithm: A) -> Self {
        ShortestPathEngine {
            algorithm,
            last: None,
        }
    }

    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    /// Runs the algorithm from `origin` and keeps the result for later queries
    pub fn compute<G: WeightedGraph>(&mut self, graph: &G, origin: NodeId) -> Result<&ShortestPaths> {
        self.last = None;
        let paths = self.algorithm.compute_shortest_paths(graph, origin)?;
        Ok(self.last.insert(paths))
    }

    /// Like [`compute`](Self::compute), resolving the origin by label
    pub fn compute_from(&mut self, graph: &Graph, origin: &str) -> Result<&ShortestPaths> {
        self.last = None;
        let origin = graph.lookup(origin)?;
        self.compute(graph, origin)
    }

    /// Full result table of the last computation
    pub fn paths(&self) -> Result<&ShortestPaths> {
        self.last.as_ref().ok_or(Error::NotComputed)
    }

    /// See [`ShortestPaths::shortest_path_length`]
    pub fn shortest_path_length(&self, destination: NodeId) -> Result<f64> {
        Ok(self.paths()?.shortest_path_length(destination))
    }

    /// See [`ShortestPaths::shortest_path`]
    pub fn shortest_path(&self, destination: NodeId) -> Result<Vec<NodeId>> {
        Ok(self.paths()?.shortest_path(destination))
    }

    /// Hands the last result over to the caller, leaving the engine empty
    pub fn take(&mut self) -> Option<ShortestPaths> {
        self.last.take()
    }
}
