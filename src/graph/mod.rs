pub mod generators;
pub mod labeled;
pub mod traits;

pub use labeled::{Graph, Node};
pub use traits::{NodeId, WeightedGraph};
