//! # ksp-filter
//!
//! Removes parallel edges from a problem file, keeping the first edge of every
//! ordered vertex pair.

use std::fs;

use clap::Parser;
use log::error;

use astar_ksp::io::filter_problem_text;
use astar_ksp::Result;

#[derive(Parser)]
#[command(name = "ksp-filter")]
#[command(about = "Remove parallel edges from a k shortest paths problem file")]
#[command(version)]
struct Cli {
    /// Problem file to filter
    input: String,

    /// Output file path, or "-" for stdout
    #[arg(default_value = "-")]
    output: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let text = fs::read_to_string(&cli.input)?;
    let (filtered, stats) = filter_problem_text(&text)?;

    if cli.output == "-" {
        print!("{}", filtered);
    } else {
        fs::write(&cli.output, filtered)?;
    }
    eprintln!("{}", stats.kept);
    Ok(())
}
