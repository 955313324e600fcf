use std::fmt::Debug;
use num_traits::{Float, Zero};
use log::warn;
use serde::Serialize;

use crate::graph::{Graph, HeuristicGraph, MutableHeuristic};
use crate::Result;

/// A source-to-destination path found by the search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoundPath<W> {
    /// Total weight, accumulated edge by edge in path order
    pub cost: W,

    /// Visited vertices, source first and destination last
    pub vertices: Vec<usize>,

    /// Indices of the edges taken, so parallel edges stay distinguishable
    pub edges: Vec<usize>,
}

/// Result of a k shortest paths query
#[derive(Debug, Clone, Serialize)]
pub struct KPathResult<W> {
    pub source: usize,

    pub destination: usize,

    /// Number of paths that were asked for
    pub requested: usize,

    /// Path costs in non-decreasing order, at most `requested` of them
    pub costs: Vec<W>,

    /// Full paths, present only when path tracking was enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<FoundPath<W>>>,

    /// Number of queue pops performed
    pub expansions: usize,
}

impl<W> KPathResult<W> {
    pub(crate) fn new(
        source: usize,
        destination: usize,
        requested: usize,
        track_paths: bool,
    ) -> Self {
        KPathResult {
            source,
            destination,
            requested,
            costs: Vec::new(),
            paths: track_paths.then(Vec::new),
            expansions: 0,
        }
    }

    /// Number of paths actually found
    pub fn found(&self) -> usize {
        self.costs.len()
    }

    /// True when as many paths as requested were found
    pub fn is_complete(&self) -> bool {
        self.costs.len() == self.requested
    }
}

/// Counters reported by a preprocessing pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PreprocessStats {
    pub destination: usize,

    /// Vertices whose distance to the destination was finalized
    pub settled: usize,

    pub pushes: usize,

    pub decreases: usize,
}

/// Trait for passes that compute the per-vertex distance to a destination
pub trait HeuristicPreprocessor<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: MutableHeuristic<W>,
{
    /// Overwrite every vertex's distance to `destination`
    fn compute_heuristic(&self, graph: &mut G, destination: usize) -> Result<PreprocessStats>;

    /// Get the name of the pass
    fn name(&self) -> &'static str;
}

/// Trait for k shortest paths searches over a preprocessed graph
pub trait KShortestPaths<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: HeuristicGraph<W>,
{
    /// Find up to `k` cheapest paths from `source` to `destination`
    fn find_paths(
        &self,
        graph: &G,
        source: usize,
        destination: usize,
        k: usize,
    ) -> Result<KPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Check that a found path only uses existing edges and adds up to its cost
    ///
    /// Costs are compared with a relative `tolerance`, since sums of floating
    /// point weights are only exact when accumulated in the same order.
    fn verify_path(&self, graph: &G, path: &FoundPath<W>, tolerance: f64) -> bool {
        if path.vertices.is_empty() || path.vertices.len() != path.edges.len() + 1 {
            warn!(
                "Malformed path: {} vertices for {} edges",
                path.vertices.len(),
                path.edges.len()
            );
            return false;
        }

        let mut length = W::zero();
        for (i, &edge_index) in path.edges.iter().enumerate() {
            if edge_index >= graph.edge_count() {
                warn!("Path uses unknown edge {}", edge_index);
                return false;
            }
            let edge = graph.edge(edge_index);
            if edge.from != path.vertices[i] || edge.to != path.vertices[i + 1] {
                warn!(
                    "Edge {} joins {} -> {}, path expects {} -> {}",
                    edge_index,
                    edge.from,
                    edge.to,
                    path.vertices[i],
                    path.vertices[i + 1]
                );
                return false;
            }
            length = length + edge.weight;
        }

        let length = length.to_f64().unwrap_or(f64::NAN);
        let cost = path.cost.to_f64().unwrap_or(f64::NAN);
        let matches = (length - cost).abs() <= tolerance * cost.abs().max(1.0);
        if !matches {
            warn!("Path length {} does not match reported cost {}", length, cost);
        }
        matches
    }
}
