use astar_ksp::algorithm::{HeuristicPreprocessor, KShortestPaths};
use astar_ksp::graph::generators::{generate_grid, generate_layered_dag, generate_random};
use astar_ksp::graph::{DirectedGraph, Graph, HeuristicGraph};
use astar_ksp::{k_shortest_path_costs, search_batch, AStarKPaths, Error, FoundPath, KPathResult, ReverseDijkstra};

type G = DirectedGraph<f64>;

fn preprocess(graph: &mut G, destination: usize) {
    <ReverseDijkstra as HeuristicPreprocessor<f64, G>>::compute_heuristic(&ReverseDijkstra::new(), graph, destination)
        .unwrap();
}

fn search(search: &AStarKPaths, graph: &G, source: usize, destination: usize, k: usize) -> astar_ksp::Result<KPathResult<f64>> {
    <AStarKPaths as KShortestPaths<f64, G>>::find_paths(search, graph, source, destination, k)
}

fn solve(graph: &mut G, source: usize, destination: usize, k: usize) -> KPathResult<f64> {
    preprocess(graph, destination);
    search(&AStarKPaths::new().with_paths(true), graph, source, destination, k).unwrap()
}

// Every source-to-destination path cost of a DAG, by exhaustive DFS
fn brute_force_costs(graph: &G, source: usize, destination: usize) -> Vec<f64> {
    fn walk(graph: &G, vertex: usize, destination: usize, cost: f64, out: &mut Vec<f64>) {
        if vertex == destination {
            out.push(cost);
            return;
        }
        for (next, weight) in graph.outgoing_edges(vertex) {
            walk(graph, next, destination, cost + weight, out);
        }
    }

    let mut costs = Vec::new();
    walk(graph, source, destination, 0.0, &mut costs);
    costs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    costs
}

fn assert_non_decreasing(costs: &[f64]) {
    for pair in costs.windows(2) {
        assert!(pair[0] <= pair[1] + 1e-9, "costs out of order: {:?}", costs);
    }
}

fn diamond() -> G {
    DirectedGraph::try_load(4, vec![(0, 1, 1.0), (1, 3, 1.0), (0, 2, 5.0), (2, 3, 1.0)]).unwrap()
}

#[test]
fn test_diamond_two_paths() {
    let mut graph = diamond();
    let result = solve(&mut graph, 0, 3, 2);

    assert_eq!(result.costs, vec![2.0, 6.0]);
    assert!(result.is_complete());

    let paths = result.paths.unwrap();
    assert_eq!(paths[0].vertices, vec![0, 1, 3]);
    assert_eq!(paths[1].vertices, vec![0, 2, 3]);
    assert_eq!(paths[1].edges, vec![2, 3]);
}

#[test]
fn test_k_larger_than_path_count() {
    let mut graph = diamond();
    let result = solve(&mut graph, 0, 3, 10);

    assert_eq!(result.costs, vec![2.0, 6.0]);
    assert_eq!(result.found(), 2);
    assert_eq!(result.requested, 10);
    assert!(!result.is_complete());
}

#[test]
fn test_disconnected_destination_gives_empty_result() {
    let mut graph = DirectedGraph::try_load(4, vec![(0, 1, 1.0), (1, 2, 1.0), (3, 0, 1.0)]).unwrap();
    let result = solve(&mut graph, 0, 3, 3);

    assert!(result.costs.is_empty());
    assert_eq!(result.paths, Some(Vec::new()));
}

#[test]
fn test_source_equals_destination() {
    let mut graph = DirectedGraph::try_load(2, vec![(0, 1, 1.0), (1, 0, 1.0)]).unwrap();
    let result = solve(&mut graph, 0, 0, 3);

    // The destination is never expanded, so the trivial path is the only one
    assert_eq!(result.costs, vec![0.0]);
    assert_eq!(result.paths.unwrap()[0].vertices, vec![0]);
}

#[test]
fn test_parallel_edges_count_as_distinct_paths() {
    let mut graph = DirectedGraph::try_load(3, vec![(0, 1, 1.0), (0, 1, 1.0), (1, 2, 1.0), (0, 1, 4.0)]).unwrap();
    let result = solve(&mut graph, 0, 2, 5);

    assert_eq!(result.costs, vec![2.0, 2.0, 5.0]);
    let mut first_edges: Vec<usize> = result.paths.unwrap().iter().map(|p| p.edges[0]).collect();
    first_edges.sort();
    assert_eq!(first_edges, vec![0, 1, 3]);
}

#[test]
fn test_cycles_produce_longer_walks() {
    let mut graph = DirectedGraph::try_load(3, vec![(0, 1, 1.0), (1, 0, 1.0), (1, 2, 1.0)]).unwrap();
    let result = solve(&mut graph, 0, 2, 3);

    assert_eq!(result.costs, vec![2.0, 4.0, 6.0]);
    assert_eq!(result.paths.unwrap()[2].vertices, vec![0, 1, 0, 1, 0, 1, 2]);
}

#[test]
fn test_costs_only_by_default() {
    let mut graph = diamond();
    preprocess(&mut graph, 3);
    let result = search(&AStarKPaths::new(), &graph, 0, 3, 2).unwrap();

    assert_eq!(result.costs, vec![2.0, 6.0]);
    assert!(result.paths.is_none());
}

#[test]
fn test_matches_brute_force_on_layered_dags() {
    for seed in 0..10 {
        let mut graph = generate_layered_dag(4, 3, seed).unwrap();
        let sink = graph.vertex_count() - 1;
        let expected = brute_force_costs(&graph, 0, sink);
        assert_eq!(expected.len(), 81);

        let k = 30;
        let result = solve(&mut graph, 0, sink, k);
        assert_eq!(result.found(), k);
        for (got, want) in result.costs.iter().zip(expected.iter()) {
            assert!((got - want).abs() <= 1e-9, "seed {}: got {} want {}", seed, got, want);
        }

        let all = solve(&mut graph, 0, sink, 1_000);
        assert_eq!(all.found(), 81);
    }
}

#[test]
fn test_path_finding_simple_grid() {
    let mut graph = generate_grid(10, 10).unwrap();

    let source = 0; // Top-left corner (0,0)
    let target = 99; // Bottom-right corner (9,9)
    let result = solve(&mut graph, source, target, 20);

    assert_eq!(result.found(), 20);
    assert!((result.costs[0] - 9.0 * 1.4).abs() < 1e-9);
    assert_non_decreasing(&result.costs);

    let searcher = AStarKPaths::new().with_paths(true);
    for path in result.paths.as_ref().unwrap() {
        assert_eq!(path.vertices[0], source, "Path should start at source");
        assert_eq!(path.vertices[path.vertices.len() - 1], target, "Path should end at target");
        for pair in path.vertices.windows(2) {
            assert!(graph.has_edge(pair[0], pair[1]), "Path should only use existing edges");
        }
        assert!(<AStarKPaths as KShortestPaths<f64, G>>::verify_path(&searcher, &graph, path, 1e-9));
    }
}

#[test]
fn test_verify_path_rejects_bad_paths() {
    let mut graph = diamond();
    let result = solve(&mut graph, 0, 3, 1);
    let searcher = AStarKPaths::new();
    let verify = |path: &FoundPath<f64>| <AStarKPaths as KShortestPaths<f64, G>>::verify_path(&searcher, &graph, path, 1e-9);

    let good = result.paths.unwrap().remove(0);
    assert!(verify(&good));

    let mut wrong_cost = good.clone();
    wrong_cost.cost = 2.5;
    assert!(!verify(&wrong_cost));

    let mut wrong_edge = good.clone();
    wrong_edge.edges[0] = 2;
    assert!(!verify(&wrong_edge));

    let mut truncated = good;
    truncated.vertices.pop();
    assert!(!verify(&truncated));
}

#[test]
fn test_random_graphs_non_decreasing_and_verified() {
    let searcher = AStarKPaths::new().with_paths(true);
    for seed in 0..10 {
        let mut graph = generate_random(500, 4.0, seed).unwrap();
        let result = solve(&mut graph, 0, 499, 50);

        assert_non_decreasing(&result.costs);
        for path in result.paths.as_ref().unwrap() {
            assert!(<AStarKPaths as KShortestPaths<f64, G>>::verify_path(&searcher, &graph, path, 1e-9));
        }
    }
}

#[test]
fn test_search_errors() {
    let mut graph = diamond();
    let searcher = AStarKPaths::new();

    // No heuristic yet
    assert!(matches!(
        search(&searcher, &graph, 0, 3, 1),
        Err(Error::HeuristicMismatch { computed: None, requested: 3 })
    ));

    preprocess(&mut graph, 3);
    assert!(matches!(search(&searcher, &graph, 0, 3, 0), Err(Error::InvalidK)));
    assert!(matches!(search(&searcher, &graph, 7, 3, 1), Err(Error::InvalidVertex(7))));
    assert!(matches!(search(&searcher, &graph, 0, 9, 1), Err(Error::InvalidVertex(9))));
    assert!(matches!(
        search(&searcher, &graph, 0, 2, 1),
        Err(Error::HeuristicMismatch { computed: Some(3), requested: 2 })
    ));
}

#[test]
fn test_k_shortest_path_costs_preprocesses_on_demand() {
    let mut graph = diamond();
    assert_eq!(k_shortest_path_costs(&mut graph, 0, 3, 2).unwrap(), vec![2.0, 6.0]);
    assert_eq!(k_shortest_path_costs(&mut graph, 1, 3, 5).unwrap(), vec![1.0]);
    assert_eq!(k_shortest_path_costs(&mut graph, 0, 2, 1).unwrap(), vec![5.0]);
    assert!(k_shortest_path_costs(&mut graph, 3, 0, 1).unwrap().is_empty());
}

#[test]
fn test_adding_an_edge_invalidates_the_heuristic() {
    let mut graph = DirectedGraph::try_load(4, vec![(0, 1, 1.0), (1, 3, 10.0), (0, 3, 5.0)]).unwrap();
    assert_eq!(k_shortest_path_costs(&mut graph, 0, 3, 1).unwrap(), vec![5.0]);

    graph.add_edge(1, 3, 1.0).unwrap();
    assert_eq!(graph.heuristic_destination(), None);
    assert!(matches!(
        search(&AStarKPaths::new(), &graph, 0, 3, 1),
        Err(Error::HeuristicMismatch { computed: None, requested: 3 })
    ));

    let costs = k_shortest_path_costs(&mut graph, 0, 3, 3).unwrap();
    assert_eq!(costs, vec![2.0, 5.0, 11.0]);
    assert_non_decreasing(&costs);
}

#[test]
fn test_batch_matches_sequential_searches() {
    let mut graph = generate_random(400, 3.0, 5).unwrap();
    let destination = 17;
    preprocess(&mut graph, destination);

    let searcher = AStarKPaths::new();
    let queries: Vec<(usize, usize)> = (0..40).map(|i| (i * 10, 1 + i % 7)).collect();
    let batch = search_batch(&searcher, &graph, destination, &queries);

    assert_eq!(batch.len(), queries.len());
    for (&(source, k), answer) in queries.iter().zip(batch) {
        let expected = search(&searcher, &graph, source, destination, k).unwrap();
        assert_eq!(answer.unwrap().costs, expected.costs);
    }
}
