use std::collections::HashSet;

use log::info;
use serde::Serialize;

use crate::io::input::Tokens;
use crate::{Error, Result};

/// Edge counts before and after removing parallel edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    pub read: usize,
    pub kept: usize,
}

impl FilterStats {
    pub fn removed(&self) -> usize {
        self.read - self.kept
    }
}

/// Keeps the first edge of every ordered `(from, to)` pair, preserving order
pub fn dedup_parallel_edges<W: Copy>(edges: &[(usize, usize, W)]) -> Vec<(usize, usize, W)> {
    let mut seen = HashSet::with_capacity(edges.len());
    edges
        .iter()
        .filter(|(from, to, _)| seen.insert((*from, *to)))
        .copied()
        .collect()
}

/// Rewrites a problem file without parallel edges
///
/// The edge count in the header is corrected and weights are copied verbatim.
/// Whatever follows the edge list (normally the query line) is kept as is.
pub fn filter_problem_text(text: &str) -> Result<(String, FilterStats)> {
    let mut tokens = Tokens::new(text);

    let vertex_count: usize = tokens.next_value("vertex count")?;
    let edge_count: usize = tokens.next_value("edge count")?;

    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    for _ in 0..edge_count {
        let from: usize = tokens.next_value("edge source")?;
        let to: usize = tokens.next_value("edge target")?;
        let weight = tokens.next_token("edge weight")?;
        if from >= vertex_count || to >= vertex_count {
            return Err(Error::InvalidEdge(from, to));
        }
        if seen.insert((from, to)) {
            kept.push((from, to, weight));
        }
    }

    let rest = tokens.rest();
    let stats = FilterStats {
        read: edge_count,
        kept: kept.len(),
    };

    let mut output = format!("{} {}\n", vertex_count, kept.len());
    for (from, to, weight) in &kept {
        output.push_str(&format!("{} {} {}\n", from, to, weight));
    }
    if !rest.is_empty() {
        output.push_str(&rest.join(" "));
        output.push('\n');
    }

    info!(
        "Kept {} of {} edges ({} parallel edges removed)",
        stats.kept,
        stats.read,
        stats.removed()
    );
    Ok((output, stats))
}
