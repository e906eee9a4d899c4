//! Dijkstra Paths - single-source shortest paths over labeled weighted graphs
//!
//! Build a [`Graph`] (by hand or through one of the [`parser`] formats), pick an
//! origin node and run [`Dijkstra`]. The result is an immutable [`ShortestPaths`]
//! table answering distance and path queries. [`ShortestPathEngine`] keeps the
//! most recent table around for callers that want the stateful workflow.
//!
//! Edge weights must be finite and non-negative; anything else is rejected with
//! an [`Error`] rather than producing a wrong distance.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod parser;
pub mod report;

pub use algorithm::{
    dijkstra::Dijkstra, engine::ShortestPathEngine, PathData, ShortestPathAlgorithm,
    ShortestPaths,
};
pub use data_structures::{HeapError, IndexedMinHeap};
/// Re-export main types for convenient use
pub use graph::{Graph, Node, NodeId, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Invalid node handle: {0}")]
    InvalidNode(NodeId),

    #[error("Node already exists: {0}")]
    DuplicateNode(String),

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: NodeId, to: NodeId, weight: f64 },

    #[error("Non-finite edge weight {weight} on edge {from} -> {to}")]
    NonFiniteWeight { from: NodeId, to: NodeId, weight: f64 },

    #[error("Distance to {node} overflows through {via}")]
    DistanceOverflow { node: NodeId, via: NodeId },

    #[error("Node {0} was relaxed after its distance was finalized")]
    SettledNodeRelaxed(NodeId),

    #[error("No shortest paths have been computed yet")]
    NotComputed,

    #[error(transparent)]
    Heap(#[from] HeapError),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
