//! Serializable views of graphs and shortest path results for presentation

use serde::Serialize;

use crate::algorithm::ShortestPaths;
use crate::graph::{Graph, NodeId};

/// One outgoing edge in a [`GraphReport`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeEntry {
    pub to: String,
    pub weight: f64,
}

/// One node and its outgoing edges in a [`GraphReport`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeEntry {
    pub label: String,
    pub edges: Vec<EdgeEntry>,
}

/// Complete dump of a graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphReport {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes: Vec<NodeEntry>,
}

impl GraphReport {
    pub fn from_graph(graph: &Graph) -> Self {
        let nodes: Vec<NodeEntry> = graph
            .nodes()
            .map(|node| NodeEntry {
                label: node.label().to_string(),
                edges: node
                    .neighbors()
                    .map(|(to, weight)| EdgeEntry {
                        to: label_of(graph, to),
                        weight,
                    })
                    .collect(),
            })
            .collect();

        GraphReport {
            node_count: nodes.len(),
            edge_count: graph.edge_count(),
            nodes,
        }
    }
}

/// Distance and route to one node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathEntry {
    pub node: String,
    /// `None` when the node cannot be reached
    pub distance: Option<f64>,
    pub path: Vec<String>,
}

/// Shortest path results labeled for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathsReport {
    pub origin: String,
    pub entries: Vec<PathEntry>,
}

impl PathsReport {
    /// Every reachable node, in node creation order
    pub fn reachable(graph: &Graph, paths: &ShortestPaths) -> Self {
        PathsReport {
            origin: label_of(graph, paths.origin()),
            entries: paths
                .paths()
                .keys()
                .map(|&node| entry(graph, paths, node))
                .collect(),
        }
    }

    /// A single destination, reachable or not
    pub fn destination(graph: &Graph, paths: &ShortestPaths, destination: NodeId) -> Self {
        PathsReport {
            origin: label_of(graph, paths.origin()),
            entries: vec![entry(graph, paths, destination)],
        }
    }
}

fn entry(graph: &Graph, paths: &ShortestPaths, node: NodeId) -> PathEntry {
    PathEntry {
        node: label_of(graph, node),
        distance: paths.get(node).map(|data| data.distance),
        path: paths
            .shortest_path(node)
            .into_iter()
            .map(|id| label_of(graph, id))
            .collect(),
    }
}

fn label_of(graph: &Graph, node: NodeId) -> String {
    graph
        .label(node)
        .map_or_else(|| node.to_string(), str::to_string)
}
