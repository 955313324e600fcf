use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::Result;

/// How results are written by the command line tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma separated costs on one line
    #[default]
    Text,
    /// A JSON report with costs, paths and timings
    Json,
}

/// Settings for a k shortest paths run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Reconstruct the vertex sequence of every path
    pub track_paths: bool,

    /// Check every reconstructed path against the graph
    pub verify_paths: bool,

    /// Relative tolerance used when comparing path lengths to costs
    pub tolerance: f64,

    /// Print per-phase elapsed times
    pub report_timings: bool,

    pub output: OutputFormat,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            track_paths: false,
            verify_paths: false,
            tolerance: 1e-9,
            report_timings: false,
            output: OutputFormat::Text,
        }
    }
}

impl SearchConfig {
    /// Parses a JSON config; missing fields take their default value
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads a JSON config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
