use std::collections::HashMap;
use std::fmt;

use crate::graph::traits::{NodeId, WeightedGraph};
use crate::{Error, Result};

/// A labeled node and its outgoing edges
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    label: String,
    /// Outgoing edges: (target, weight), one entry per target
    neighbors: Vec<(NodeId, f64)>,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns an iterator over (neighbor, weight) pairs
    pub fn neighbors(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.neighbors.iter().copied()
    }

    /// Gets the weight of the edge to `target`, if any
    pub fn weight_to(&self, target: NodeId) -> Option<f64> {
        self.neighbors
            .iter()
            .find(|(node, _)| *node == target)
            .map(|(_, weight)| *weight)
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// A directed graph of labeled nodes with non-negative edge weights
///
/// Nodes live in an arena and are addressed by [`NodeId`]; each label maps to
/// exactly one node.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Node arena, in creation order
    nodes: Vec<Node>,

    /// Label -> node handle
    index: HashMap<String, NodeId>,
}

impl Graph {
    /// Creates a new empty graph
    pub fn new() -> Self {
        Graph {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the node for `label`, creating it if it does not exist yet
    pub fn get_node(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        self.push_node(label)
    }

    /// Creates a node for `label`, failing if one already exists
    pub fn add_node(&mut self, label: &str) -> Result<NodeId> {
        if self.index.contains_key(label) {
            return Err(Error::DuplicateNode(label.to_string()));
        }
        Ok(self.push_node(label))
    }

    fn push_node(&mut self, label: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            label: label.to_string(),
            neighbors: Vec::new(),
        });
        self.index.insert(label.to_string(), id);
        id
    }

    /// Looks up an existing node by label
    pub fn node(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Looks up an existing node by label, failing with [`Error::UnknownNode`]
    pub fn lookup(&self, label: &str) -> Result<NodeId> {
        self.node(label)
            .ok_or_else(|| Error::UnknownNode(label.to_string()))
    }

    /// Returns the node behind a handle
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Returns the label of a node
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(Node::label)
    }

    /// Iterates over all nodes in creation order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Iterates over all edges as (from, to, weight)
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.nodes
            .iter()
            .flat_map(|node| node.neighbors().map(move |(to, weight)| (node.id, to, weight)))
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum()
    }

    /// Adds a directed edge, replacing the weight of an existing edge between
    /// the same pair.
    ///
    /// The weight must be finite and non-negative.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) -> Result<()> {
        for id in [from, to] {
            if !self.contains(id) {
                return Err(Error::InvalidNode(id));
            }
        }
        if !weight.is_finite() {
            return Err(Error::NonFiniteWeight { from, to, weight });
        }
        if weight < 0.0 {
            return Err(Error::NegativeWeight { from, to, weight });
        }

        let neighbors = &mut self.nodes[from.0].neighbors;
        match neighbors.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => neighbors.push((to, weight)),
        }

        Ok(())
    }

    /// Human-readable dump of every node and its outgoing edges
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph with {} nodes and {} edges",
            self.nodes.len(),
            self.edge_count()
        )?;
        for node in &self.nodes {
            write!(f, "{}:", node.label)?;
            for (to, weight) in node.neighbors() {
                write!(f, " {}({})", self.nodes[to.0].label, weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl WeightedGraph for Graph {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn contains(&self, node: NodeId) -> bool {
        node.0 < self.nodes.len()
    }

    fn neighbors(&self, node: NodeId) -> Box<dyn Iterator<Item = (NodeId, f64)> + '_> {
        match self.nodes.get(node.0) {
            Some(node) => Box::new(node.neighbors()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.get(from).and_then(|node| node.weight_to(to))
    }
}
