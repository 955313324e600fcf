use std::fmt::Debug;
use log::{debug, trace};
use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;

use crate::algorithm::{FoundPath, KPathResult, KShortestPaths};
use crate::config::SearchConfig;
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::HeuristicGraph;
use crate::{Error, Result};

/// One step of a partial path, linked to the step it was extended from
#[derive(Debug, Clone, Copy)]
struct Label {
    vertex: usize,
    edge: Option<usize>,
    parent: Option<usize>,
}

/// A queued partial path ending at `vertex`
#[derive(Debug)]
struct SearchState<W> {
    vertex: usize,
    cost: W,
    label: Option<usize>,
}

/// K shortest paths by A* with an exact heuristic
///
/// The heuristic of a vertex is its precomputed distance to the destination,
/// so it is both admissible and consistent. The queue is a plain multi-set:
/// a vertex is queued once per partial path reaching it, and each pop of the
/// destination yields the next cheapest path. Partial paths may revisit
/// vertices, so the results are walks, counted once per distinct sequence of
/// edges. Paths are not extended past the destination.
#[derive(Debug, Clone, Default)]
pub struct AStarKPaths {
    /// Whether to reconstruct the vertex sequence of each path
    track_paths: bool,
}

impl AStarKPaths {
    /// Creates a search reporting costs only
    pub fn new() -> Self {
        AStarKPaths { track_paths: false }
    }

    /// Creates a search configured from a [`SearchConfig`]
    pub fn from_config(config: &SearchConfig) -> Self {
        AStarKPaths::new().with_paths(config.track_paths || config.verify_paths)
    }

    /// Enable or disable path reconstruction
    pub fn with_paths(mut self, enabled: bool) -> Self {
        self.track_paths = enabled;
        self
    }

    /// Returns true if paths are reconstructed
    pub fn tracks_paths(&self) -> bool {
        self.track_paths
    }
}

fn reconstruct<W: Copy>(labels: &[Label], last: Option<usize>, cost: W) -> FoundPath<W> {
    let mut vertices = Vec::new();
    let mut edges = Vec::new();
    let mut current = last;

    while let Some(index) = current {
        let label = labels[index];
        vertices.push(label.vertex);
        if let Some(edge) = label.edge {
            edges.push(edge);
        }
        current = label.parent;
    }

    vertices.reverse();
    edges.reverse();
    FoundPath {
        cost,
        vertices,
        edges,
    }
}

impl<W, G> KShortestPaths<W, G> for AStarKPaths
where
    W: Float + Zero + Debug + Copy,
    G: HeuristicGraph<W>,
{
    fn name(&self) -> &'static str {
        "A* k shortest paths"
    }

    fn find_paths(
        &self,
        graph: &G,
        source: usize,
        destination: usize,
        k: usize,
    ) -> Result<KPathResult<W>> {
        if k == 0 {
            return Err(Error::InvalidK);
        }
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        if !graph.has_vertex(destination) {
            return Err(Error::InvalidVertex(destination));
        }
        if graph.heuristic_destination() != Some(destination) {
            return Err(Error::HeuristicMismatch {
                computed: graph.heuristic_destination(),
                requested: destination,
            });
        }

        let mut result = KPathResult::new(source, destination, k, self.track_paths);

        let source_estimate = graph.shortest_path(source);
        if !source_estimate.is_finite() {
            debug!("Destination {} is unreachable from {}", destination, source);
            return Ok(result);
        }

        let mut labels: Vec<Label> = Vec::new();
        // Ties on the estimate pop in insertion order
        let mut queue: BinaryHeapWrapper<SearchState<W>, (OrderedFloat<W>, u64)> =
            BinaryHeapWrapper::new();
        let mut pushed: u64 = 0;

        let root = if self.track_paths {
            labels.push(Label {
                vertex: source,
                edge: None,
                parent: None,
            });
            Some(0)
        } else {
            None
        };
        queue.push(
            SearchState {
                vertex: source,
                cost: W::zero(),
                label: root,
            },
            (OrderedFloat(source_estimate), pushed),
        );

        while let Some((state, _)) = queue.pop() {
            result.expansions += 1;

            if state.vertex == destination {
                trace!("Path {} found with cost {:?}", result.costs.len() + 1, state.cost);
                result.costs.push(state.cost);
                if let Some(paths) = result.paths.as_mut() {
                    paths.push(reconstruct(&labels, state.label, state.cost));
                }
                if result.costs.len() == k {
                    break;
                }
                continue;
            }

            for &edge_index in graph.forward_edges(state.vertex) {
                let edge = graph.edge(edge_index);
                let estimate = graph.shortest_path(edge.to);
                if !estimate.is_finite() {
                    continue;
                }

                let cost = state.cost + edge.weight;
                let label = if self.track_paths {
                    labels.push(Label {
                        vertex: edge.to,
                        edge: Some(edge_index),
                        parent: state.label,
                    });
                    Some(labels.len() - 1)
                } else {
                    None
                };

                pushed += 1;
                queue.push(
                    SearchState {
                        vertex: edge.to,
                        cost,
                        label,
                    },
                    (OrderedFloat(cost + estimate), pushed),
                );
            }
        }

        debug!(
            "Found {} of {} paths from {} to {} after {} expansions",
            result.found(),
            k,
            source,
            destination,
            result.expansions
        );

        Ok(result)
    }
}
