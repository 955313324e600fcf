use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::graph::Edge;

/// Trait representing a weighted directed graph stored as an edge arena
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges included
    fn edge_count(&self) -> usize;

    /// Returns the edge stored at `index` in the edge arena
    fn edge(&self, index: usize) -> &Edge<W>;

    /// Returns the indices of the edges leaving `vertex`
    fn forward_edges(&self, vertex: usize) -> &[usize];

    /// Returns the indices of the edges entering `vertex`
    fn backward_edges(&self, vertex: usize) -> &[usize];

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns an iterator over the outgoing edges from a vertex as `(target, weight)`
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(self.forward_edges(vertex).iter().map(move |&index| {
            let edge = self.edge(index);
            (edge.to, edge.weight)
        }))
    }

    /// Returns an iterator over the incoming edges to a vertex as `(source, weight)`
    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(self.backward_edges(vertex).iter().map(move |&index| {
            let edge = self.edge(index);
            (edge.from, edge.weight)
        }))
    }

    /// Returns true if there's at least one edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.has_vertex(from) && self.outgoing_edges(from).any(|(target, _)| target == to)
    }
}

/// A graph that carries a per-vertex distance-to-destination estimate
pub trait HeuristicGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Shortest distance from `vertex` to the heuristic destination, infinity if unreachable
    fn shortest_path(&self, vertex: usize) -> W;

    /// Destination the stored distances were computed for, if any
    fn heuristic_destination(&self) -> Option<usize>;
}

/// Write access to the per-vertex distances, used by the preprocessing pass only
pub trait MutableHeuristic<W>: HeuristicGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Resets every distance to infinity and forgets the destination
    fn reset_heuristic(&mut self);

    /// Records the final distance of `vertex`
    fn set_shortest_path(&mut self, vertex: usize, distance: W);

    /// Records which destination the distances belong to
    fn mark_heuristic_destination(&mut self, destination: usize);
}
