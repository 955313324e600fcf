use std::fmt::Debug;
use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::{HeuristicPreprocessor, PreprocessStats};
use crate::data_structures::IndexedMinHeap;
use crate::graph::directed::check_weight;
use crate::graph::MutableHeuristic;
use crate::{Error, Result};

/// Dijkstra's algorithm run backwards from a destination over incoming edges
///
/// Produces, for every vertex, the exact shortest distance *to* the
/// destination, which the A* search uses as its heuristic. Stale queue entries
/// never exist: a vertex is queued at most once and improved in place with
/// decrease-key, and a vertex is final as soon as it is popped.
#[derive(Debug, Default)]
pub struct ReverseDijkstra;

impl ReverseDijkstra {
    /// Creates a new reverse Dijkstra pass
    pub fn new() -> Self {
        ReverseDijkstra
    }
}

impl<W, G> HeuristicPreprocessor<W, G> for ReverseDijkstra
where
    W: Float + Zero + Debug + Copy,
    G: MutableHeuristic<W>,
{
    fn name(&self) -> &'static str {
        "Reverse Dijkstra"
    }

    fn compute_heuristic(&self, graph: &mut G, destination: usize) -> Result<PreprocessStats> {
        if !graph.has_vertex(destination) {
            return Err(Error::InvalidVertex(destination));
        }

        // Distances stay infinite until their vertex is popped, so a finite
        // distance doubles as the "finalized" mark.
        graph.reset_heuristic();

        let mut stats = PreprocessStats {
            destination,
            ..Default::default()
        };
        let mut queue: IndexedMinHeap<W, ()> = IndexedMinHeap::new(graph.vertex_count());
        queue.push(destination, W::zero(), ())?;
        stats.pushes += 1;

        while let Some(entry) = queue.pop_min() {
            let current = entry.vertex;
            let distance = entry.priority;
            graph.set_shortest_path(current, distance);
            stats.settled += 1;
            trace!("Settled vertex {} at distance {:?}", current, distance);

            for &edge_index in graph.backward_edges(current) {
                let edge = graph.edge(edge_index);
                check_weight(edge)?;

                let from = edge.from;
                if graph.shortest_path(from).is_finite() {
                    continue;
                }

                let candidate = distance + edge.weight;
                if !candidate.is_finite() {
                    continue;
                }
                match queue.priority(from) {
                    None => {
                        queue.push(from, candidate, ())?;
                        stats.pushes += 1;
                    }
                    Some(best) if candidate < best => {
                        queue.decrease(from, candidate, ())?;
                        stats.decreases += 1;
                    }
                    Some(_) => {}
                }
            }
        }

        graph.mark_heuristic_destination(destination);
        debug!(
            "Heuristic for destination {}: {} of {} vertices reach it ({} pushes, {} decreases)",
            destination,
            stats.settled,
            graph.vertex_count(),
            stats.pushes,
            stats.decreases
        );

        Ok(stats)
    }
}
