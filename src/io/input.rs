//! Reader for the whitespace separated problem format:
//!
//! ```text
//! <num_vertices> <num_edges>
//! <from> <to> <weight>      (num_edges times)
//! <source> <destination> <k>
//! ```

use std::fs;
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use log::{debug, warn};

use crate::graph::{DirectedGraph, Graph};
use crate::{Error, Result};

/// A parsed and validated query
#[derive(Debug, Clone)]
pub struct Problem {
    pub graph: DirectedGraph<f64>,
    pub source: usize,
    pub destination: usize,
    pub k: usize,
}

/// Whitespace token stream that remembers the position of each token
pub(crate) struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Tokens {
            inner: text.split_whitespace(),
            position: 0,
        }
    }

    pub(crate) fn next_token(&mut self, expected: &'static str) -> Result<&'a str> {
        let token = self.inner.next().ok_or(Error::UnexpectedEof { expected })?;
        self.position += 1;
        Ok(token)
    }

    pub(crate) fn next_value<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| Error::Parse {
            position: self.position,
            token: token.to_string(),
            expected,
        })
    }

    /// Tokens left after the ones consumed so far
    pub(crate) fn rest(self) -> Vec<&'a str> {
        self.inner.collect()
    }
}

/// Parses a problem from text, validating indices, weights and `k`
pub fn parse_problem(text: &str) -> Result<Problem> {
    let mut tokens = Tokens::new(text);

    let vertex_count: usize = tokens.next_value("vertex count")?;
    let edge_count: usize = tokens.next_value("edge count")?;

    // The header is untrusted, so nothing is reserved from it
    let mut edges = Vec::new();
    for _ in 0..edge_count {
        let from: usize = tokens.next_value("edge source")?;
        let to: usize = tokens.next_value("edge target")?;
        let weight: f64 = tokens.next_value("edge weight")?;
        edges.push((from, to, weight));
    }

    let graph = DirectedGraph::try_load(vertex_count, edges)?;

    let source: usize = tokens.next_value("source vertex")?;
    let destination: usize = tokens.next_value("destination vertex")?;
    let k: usize = tokens.next_value("path count k")?;

    if !graph.has_vertex(source) {
        return Err(Error::InvalidVertex(source));
    }
    if !graph.has_vertex(destination) {
        return Err(Error::InvalidVertex(destination));
    }
    if k == 0 {
        return Err(Error::InvalidK);
    }

    let trailing = tokens.rest().len();
    if trailing > 0 {
        warn!("Ignoring {} trailing tokens after k", trailing);
    }

    debug!(
        "Parsed graph with {} vertices and {} edges, query {} -> {} (k = {})",
        graph.vertex_count(),
        graph.edge_count(),
        source,
        destination,
        k
    );

    Ok(Problem {
        graph,
        source,
        destination,
        k,
    })
}

/// Reads and parses a problem file
pub fn read_problem<P: AsRef<Path>>(path: P) -> Result<Problem> {
    let text = fs::read_to_string(path)?;
    parse_problem(&text)
}
