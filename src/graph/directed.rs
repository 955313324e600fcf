use crate::graph::traits::{Graph, HeuristicGraph, MutableHeuristic};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A weighted directed edge, stored once in the graph's edge arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W> {
    pub weight: W,
    pub from: usize,
    pub to: usize,
}

/// A vertex and the edge indices attached to it
#[derive(Debug, Clone)]
pub struct Vertex<W> {
    /// Indices of edges leaving this vertex
    forwards: Vec<usize>,

    /// Indices of edges entering this vertex
    backwards: Vec<usize>,

    /// Distance to the heuristic destination, infinity until preprocessed
    shortest_path: W,
}

impl<W> Vertex<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn new() -> Self {
        Vertex {
            forwards: Vec::new(),
            backwards: Vec::new(),
            shortest_path: W::infinity(),
        }
    }

    pub fn forwards(&self) -> &[usize] {
        &self.forwards
    }

    pub fn backwards(&self) -> &[usize] {
        &self.backwards
    }

    pub fn shortest_path(&self) -> W {
        self.shortest_path
    }
}

/// A directed graph implementation using an arena of vertices and edges
///
/// Vertices refer to edges by their position in the edge arena, so the graph
/// never holds references between its own records. Once loaded the topology is
/// fixed; only the per-vertex distances written by the preprocessing pass change.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    vertices: Vec<Vertex<W>>,

    edges: Vec<Edge<W>>,

    /// Destination the stored distances were computed for
    heuristic_destination: Option<usize>,
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new directed graph with the specified number of vertices and no edges
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            vertices: (0..vertices).map(|_| Vertex::new()).collect(),
            edges: Vec::new(),
            heuristic_destination: None,
        }
    }

    /// Builds a graph from an edge list of `(from, to, weight)` triples
    ///
    /// Endpoints are checked against `vertex_count`. Weights are taken as given;
    /// use [`DirectedGraph::try_load`] when they come from untrusted input.
    pub fn load<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut vertices = Vec::new();
        vertices
            .try_reserve_exact(vertex_count)
            .map_err(|_| Error::TooManyVertices(vertex_count))?;
        vertices.resize_with(vertex_count, Vertex::new);

        let mut graph = DirectedGraph {
            vertices,
            edges: Vec::new(),
            heuristic_destination: None,
        };
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Builds a graph like [`DirectedGraph::load`] and rejects negative or non-finite weights
    pub fn try_load<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let graph = Self::load(vertex_count, edges)?;
        graph.validate_weights()?;
        Ok(graph)
    }

    /// Appends an edge and returns its index in the edge arena
    ///
    /// Any stored heuristic is invalidated, since the new edge may shorten
    /// distances to the destination.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<usize> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }
        self.heuristic_destination = None;

        let index = self.edges.len();
        self.edges.push(Edge { weight, from, to });
        self.vertices[from].forwards.push(index);
        self.vertices[to].backwards.push(index);
        Ok(index)
    }

    /// Validate that every weight is finite and non-negative
    pub fn validate_weights(&self) -> Result<()> {
        for edge in &self.edges {
            check_weight(edge)?;
        }
        Ok(())
    }

    /// Returns the vertex record for `vertex`
    pub fn vertex(&self, vertex: usize) -> Option<&Vertex<W>> {
        self.vertices.get(vertex)
    }

    /// Returns the edge arena in insertion order
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Returns every vertex's distance to the heuristic destination
    pub fn distances(&self) -> Vec<W> {
        self.vertices.iter().map(|v| v.shortest_path).collect()
    }
}

/// Rejects weights that break the Dijkstra precondition
pub(crate) fn check_weight<W>(edge: &Edge<W>) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
{
    if !edge.weight.is_finite() {
        return Err(Error::NonFiniteWeight {
            from: edge.from,
            to: edge.to,
        });
    }
    if edge.weight < W::zero() {
        return Err(Error::NegativeWeight {
            from: edge.from,
            to: edge.to,
            weight: edge.weight.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edge(&self, index: usize) -> &Edge<W> {
        &self.edges[index]
    }

    fn forward_edges(&self, vertex: usize) -> &[usize] {
        &self.vertices[vertex].forwards
    }

    fn backward_edges(&self, vertex: usize) -> &[usize] {
        &self.vertices[vertex].backwards
    }
}

impl<W> HeuristicGraph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn shortest_path(&self, vertex: usize) -> W {
        self.vertices[vertex].shortest_path
    }

    fn heuristic_destination(&self) -> Option<usize> {
        self.heuristic_destination
    }
}

impl<W> MutableHeuristic<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn reset_heuristic(&mut self) {
        for vertex in &mut self.vertices {
            vertex.shortest_path = W::infinity();
        }
        self.heuristic_destination = None;
    }

    fn set_shortest_path(&mut self, vertex: usize, distance: W) {
        self.vertices[vertex].shortest_path = distance;
    }

    fn mark_heuristic_destination(&mut self, destination: usize) {
        self.heuristic_destination = Some(destination);
    }
}
