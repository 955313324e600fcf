pub mod traits;
pub mod dijkstra;
pub mod astar;

pub use traits::{FoundPath, HeuristicPreprocessor, KPathResult, KShortestPaths, PreprocessStats};

use std::fmt::Debug;
use log::info;
use num_traits::{Float, Zero};
use rayon::prelude::*;

use crate::graph::{HeuristicGraph, MutableHeuristic};
use crate::Result;
use astar::AStarKPaths;
use dijkstra::ReverseDijkstra;

/// Costs of the `k` cheapest paths from `source` to `destination`
///
/// Runs the reverse Dijkstra preprocessing unless the graph already holds
/// distances for `destination`, then the A* search. Fewer than `k` costs are
/// returned when fewer paths exist.
pub fn k_shortest_path_costs<W, G>(
    graph: &mut G,
    source: usize,
    destination: usize,
    k: usize,
) -> Result<Vec<W>>
where
    W: Float + Zero + Debug + Copy,
    G: MutableHeuristic<W>,
{
    if graph.heuristic_destination() != Some(destination) {
        let stats = <ReverseDijkstra as HeuristicPreprocessor<W, G>>::compute_heuristic(
            &ReverseDijkstra::new(),
            graph,
            destination,
        )?;
        info!("Preprocessed destination {}: {} vertices settled", destination, stats.settled);
    }

    let result = <AStarKPaths as KShortestPaths<W, G>>::find_paths(
        &AStarKPaths::new(),
        &*graph,
        source,
        destination,
        k,
    )?;
    Ok(result.costs)
}

/// Answers several `(source, k)` queries against one preprocessed graph in parallel
///
/// The searches only read the graph, each with its own queue. Results come
/// back in query order.
pub fn search_batch<W, G>(
    search: &AStarKPaths,
    graph: &G,
    destination: usize,
    queries: &[(usize, usize)],
) -> Vec<Result<KPathResult<W>>>
where
    W: Float + Zero + Debug + Copy + Send + Sync,
    G: HeuristicGraph<W> + Sync,
{
    queries
        .par_iter()
        .map(|&(source, k)| {
            <AStarKPaths as KShortestPaths<W, G>>::find_paths(search, graph, source, destination, k)
        })
        .collect()
}
