use log::{debug, trace};
use ordered_float::OrderedFloat;

use crate::algorithm::{PathData, ShortestPathAlgorithm, ShortestPaths};
use crate::data_structures::IndexedMinHeap;
use crate::graph::{NodeId, WeightedGraph};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over an indexed min-heap
///
/// Relaxing a node that is still on the frontier lowers its heap priority in
/// place, so nodes are always extracted in order of their final distance.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Shorthand for [`ShortestPathAlgorithm::compute_shortest_paths`]
    pub fn compute<G: WeightedGraph>(&self, graph: &G, origin: NodeId) -> Result<ShortestPaths> {
        self.compute_shortest_paths(graph, origin)
    }
}

fn check_weight(from: NodeId, to: NodeId, weight: f64) -> Result<()> {
    if !weight.is_finite() {
        return Err(Error::NonFiniteWeight { from, to, weight });
    }
    if weight < 0.0 {
        return Err(Error::NegativeWeight { from, to, weight });
    }
    Ok(())
}

impl ShortestPathAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths<G: WeightedGraph>(
        &self,
        graph: &G,
        origin: NodeId,
    ) -> Result<ShortestPaths> {
        if !graph.contains(origin) {
            return Err(Error::InvalidNode(origin));
        }

        debug!(
            "Computing shortest paths from {} over {} nodes",
            origin,
            graph.node_count()
        );

        let mut paths = ShortestPaths::new(origin);
        let mut frontier = IndexedMinHeap::new();
        frontier.insert(origin, OrderedFloat(0.0))?;

        while let Some((f, OrderedFloat(dist_f))) = frontier.pop() {
            for (w, weight) in graph.neighbors(f) {
                if !graph.contains(w) {
                    return Err(Error::InvalidNode(w));
                }
                check_weight(f, w, weight)?;

                let candidate = dist_f + weight;
                match paths.get_mut(w) {
                    None => {
                        // Finite weights can still sum past f64::MAX, and an infinite
                        // distance would read as unreachable
                        if !candidate.is_finite() {
                            return Err(Error::DistanceOverflow { node: w, via: f });
                        }
                        paths.record(
                            w,
                            PathData {
                                distance: candidate,
                                predecessor: Some(f),
                            },
                        );
                        frontier.insert(w, OrderedFloat(candidate))?;
                    }
                    Some(record) if candidate < record.distance => {
                        // Recorded but no longer on the frontier means already extracted;
                        // unreachable while every weight is non-negative
                        if !frontier.contains(&w) {
                            return Err(Error::SettledNodeRelaxed(w));
                        }
                        trace!(
                            "Relaxed {}: {} -> {} via {}",
                            w,
                            record.distance,
                            candidate,
                            f
                        );
                        record.distance = candidate;
                        record.predecessor = Some(f);
                        frontier.decrease_key(&w, OrderedFloat(candidate))?;
                    }
                    Some(_) => {}
                }
            }
        }

        debug!("Reached {} of {} nodes", paths.len(), graph.node_count());

        Ok(paths)
    }
}
