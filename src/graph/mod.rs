pub mod traits;
pub mod directed;
pub mod generators;

pub use traits::{Graph, HeuristicGraph, MutableHeuristic};
pub use directed::{DirectedGraph, Edge, Vertex};
