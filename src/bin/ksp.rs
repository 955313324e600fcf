//! # ksp
//!
//! Reads a problem file and prints the costs of the k shortest paths.

use clap::Parser;
use log::{error, info};

use astar_ksp::algorithm::{HeuristicPreprocessor, KShortestPaths};
use astar_ksp::graph::DirectedGraph;
use astar_ksp::io::read_problem;
use astar_ksp::report::{timed, PhaseTimings, RunReport};
use astar_ksp::{AStarKPaths, OutputFormat, Result, ReverseDijkstra, SearchConfig};

/// Command-line interface for the k shortest paths solver
#[derive(Parser)]
#[command(name = "ksp")]
#[command(about = "K shortest paths using A* with an exact reverse Dijkstra heuristic")]
#[command(long_about = "Reads a problem file of the form:
  <num_vertices> <num_edges>
  <from> <to> <weight>        (num_edges lines)
  <source> <destination> <k>

and prints the costs of the k cheapest paths, comma separated.")]
#[command(version)]
struct Cli {
    /// Problem file to solve
    file: String,

    /// JSON config file; command line flags override it
    #[arg(long)]
    config: Option<String>,

    /// Print the vertex sequence of every path
    #[arg(long)]
    paths: bool,

    /// Check every path against the graph (implies --paths)
    #[arg(long)]
    verify: bool,

    /// Print per-phase elapsed times
    #[arg(long)]
    timings: bool,

    /// Print a JSON report instead of plain text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn search_config(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_file(path)?,
            None => SearchConfig::default(),
        };

        config.track_paths |= self.paths || self.verify;
        config.verify_paths |= self.verify;
        config.report_timings |= self.timings;
        if self.json {
            config.output = OutputFormat::Json;
        }
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.search_config()?;

    let (problem, build_time) = timed(|| read_problem(&cli.file));
    let mut problem = problem?;
    info!("Loaded {} in {:?}", cli.file, build_time);

    let preprocessor = ReverseDijkstra::new();
    let (stats, preprocess_time) = timed(|| {
        <ReverseDijkstra as HeuristicPreprocessor<f64, DirectedGraph<f64>>>::compute_heuristic(
            &preprocessor,
            &mut problem.graph,
            problem.destination,
        )
    });
    let stats = stats?;
    info!("Settled {} vertices in {:?}", stats.settled, preprocess_time);

    let search = AStarKPaths::from_config(&config);
    let (result, search_time) = timed(|| {
        <AStarKPaths as KShortestPaths<f64, DirectedGraph<f64>>>::find_paths(
            &search,
            &problem.graph,
            problem.source,
            problem.destination,
            problem.k,
        )
    });
    let result = result?;
    info!("Found {} of {} paths in {:?}", result.found(), problem.k, search_time);

    let verified = if config.verify_paths {
        let paths = result.paths.as_deref().unwrap_or_default();
        Some(paths.iter().all(|path| {
            <AStarKPaths as KShortestPaths<f64, DirectedGraph<f64>>>::verify_path(
                &search,
                &problem.graph,
                path,
                config.tolerance,
            )
        }))
    } else {
        None
    };

    let mut report = RunReport::new(result);
    if !config.track_paths {
        report.paths = None;
    }
    if let Some(verified) = verified {
        report = report.with_verification(verified);
    }
    if config.report_timings {
        report = report.with_timings(PhaseTimings::new(build_time, preprocess_time, search_time));
    }

    print!("{}", report.render(config.output)?);
    Ok(())
}
