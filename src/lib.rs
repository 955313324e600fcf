//! A* K Shortest Paths
//!
//! This library enumerates the k cheapest paths between two vertices of a
//! weighted directed graph in non-decreasing order of cost.
//!
//! The work is split in two phases. A reverse Dijkstra pass from the
//! destination computes, for every vertex, the exact remaining distance to the
//! destination. A forward A* search then uses that distance as a perfect
//! heuristic: every time the destination is popped from the queue, the next
//! cheapest path has been found.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod io;
pub mod report;

/// Re-export main types for convenient use
pub use algorithm::{
    astar::AStarKPaths, dijkstra::ReverseDijkstra, k_shortest_path_costs, search_batch,
    FoundPath, KPathResult, KShortestPaths,
};
pub use config::{OutputFormat, SearchConfig};
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize, weight: f64 },

    #[error("Non-finite edge weight on edge {from} -> {to}")]
    NonFiniteWeight { from: usize, to: usize },

    #[error("Cannot allocate a graph with {0} vertices")]
    TooManyVertices(usize),

    #[error("k must be at least 1")]
    InvalidK,

    #[error("Parse error at token {position} ({token:?}): expected {expected}")]
    Parse {
        position: usize,
        token: String,
        expected: &'static str,
    },

    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("Heuristic was computed for {computed:?}, but the search targets vertex {requested}")]
    HeuristicMismatch {
        computed: Option<usize>,
        requested: usize,
    },

    #[error("Priority queue invariant violated: {0}")]
    QueueInvariant(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
