use crate::graph::DirectedGraph;
use crate::Result;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random directed graph with roughly `edge_factor * n` edges
///
/// Weights are drawn uniformly from `[1, 100)`. Self-loops are skipped; parallel
/// edges may occur. The same `seed` always yields the same graph.
pub fn generate_random(n: usize, edge_factor: f64, seed: u64) -> Result<DirectedGraph<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    if n < 2 {
        return Ok(graph);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(1.0..100.0);
            graph.add_edge(u, v, weight)?;
        }
    }

    Ok(graph)
}

/// Generates a `width * height` grid with edges to all 8 neighbours
///
/// Cardinal moves cost 1.0 and diagonal moves cost 1.4. Vertex `(x, y)` has
/// index `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> Result<DirectedGraph<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    graph.add_edge(vertex, neighbor, cost)?;
                }
            }
        }
    }

    Ok(graph)
}

/// Generates a layered DAG: a source, `layers` layers of `width` vertices, and a sink
///
/// Every vertex of a layer connects to every vertex of the next one, so the
/// number of source-to-sink paths is `width^layers`. Vertex 0 is the source and
/// the last vertex is the sink.
pub fn generate_layered_dag(layers: usize, width: usize, seed: u64) -> Result<DirectedGraph<f64>> {
    let n = layers * width + 2;
    let sink = n - 1;
    let mut graph = DirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    let layer_vertex = |layer: usize, i: usize| 1 + layer * width + i;

    if layers == 0 || width == 0 {
        graph.add_edge(0, sink, rng.gen_range(1.0..10.0))?;
        return Ok(graph);
    }

    for i in 0..width {
        graph.add_edge(0, layer_vertex(0, i), rng.gen_range(1.0..10.0))?;
        graph.add_edge(layer_vertex(layers - 1, i), sink, rng.gen_range(1.0..10.0))?;
    }

    for layer in 0..layers - 1 {
        for i in 0..width {
            for j in 0..width {
                let weight = rng.gen_range(1.0..10.0);
                graph.add_edge(layer_vertex(layer, i), layer_vertex(layer + 1, j), weight)?;
            }
        }
    }

    Ok(graph)
}
