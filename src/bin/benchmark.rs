use std::time::Duration;

use astar_ksp::algorithm::{search_batch, HeuristicPreprocessor, KShortestPaths};
use astar_ksp::graph::generators::generate_random;
use astar_ksp::graph::{DirectedGraph, Graph};
use astar_ksp::report::timed;
use astar_ksp::{AStarKPaths, Result, ReverseDijkstra};

// Preprocess once, then run one search; returns (preprocess, search, paths found)
fn benchmark_query(
    graph: &mut DirectedGraph<f64>,
    source: usize,
    destination: usize,
    k: usize,
) -> Result<(Duration, Duration, usize)> {
    let (stats, preprocess_time) = timed(|| {
        <ReverseDijkstra as HeuristicPreprocessor<f64, DirectedGraph<f64>>>::compute_heuristic(
            &ReverseDijkstra::new(),
            &mut *graph,
            destination,
        )
    });
    let stats = stats?;

    let (result, search_time) = timed(|| {
        <AStarKPaths as KShortestPaths<f64, DirectedGraph<f64>>>::find_paths(
            &AStarKPaths::new(),
            &*graph,
            source,
            destination,
            k,
        )
    });
    let result = result?;

    println!(
        "  - {} vertices reach the destination, {} paths found, {} expansions",
        stats.settled,
        result.found(),
        result.expansions
    );

    Ok((preprocess_time, search_time, result.found()))
}

fn main() -> Result<()> {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];
    let edge_factor = 4.0;
    let k = 100;

    println!("=====================================================");
    println!("Benchmark: reverse Dijkstra + A* k shortest paths");
    println!("Edge factor: {} edges per vertex, k = {}", edge_factor, k);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let mut graph = generate_random(size, edge_factor, size as u64)?;
        let source = 0;
        let destination = size - 1;
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let (preprocess_time, search_time, found) =
            benchmark_query(&mut graph, source, destination, k)?;

        // Same destination, many sources, answered concurrently
        let queries: Vec<(usize, usize)> = (0..64).map(|i| (i * size / 64, k)).collect();
        let (batch, batch_time) =
            timed(|| search_batch(&AStarKPaths::new(), &graph, destination, &queries));
        let answered = batch.iter().filter(|r| r.is_ok()).count();
        println!("  - Batch of {} queries answered in {:?}", answered, batch_time);

        results.push((size, preprocess_time, search_time, found, batch_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<18} | {:<15} | {:<8} | {:<15}",
             "Vertices", "Preprocess (ms)", "Search (ms)", "Found", "Batch x64 (ms)");
    println!("-----------------------------------------------------");

    for (size, preprocess_time, search_time, found, batch_time) in &results {
        println!("{:<10} | {:<18.2} | {:<15.2} | {:<8} | {:<15.2}",
                 size,
                 preprocess_time.as_secs_f64() * 1000.0,
                 search_time.as_secs_f64() * 1000.0,
                 found,
                 batch_time.as_secs_f64() * 1000.0);
    }

    Ok(())
}
