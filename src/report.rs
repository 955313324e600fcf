use std::time::{Duration, Instant};

use serde::Serialize;

use crate::algorithm::{FoundPath, KPathResult};
use crate::config::OutputFormat;
use crate::Result;

/// Runs `f` and returns its value along with the elapsed time
pub fn timed<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Formats a cost with at most 10 significant digits
///
/// Rounding hides the last-bit noise of summed weights, so `0.1 + 0.2`
/// prints as `0.3`.
pub fn format_cost(cost: f64) -> String {
    let rounded: f64 = format!("{:.9e}", cost).parse().unwrap_or(cost);
    rounded.to_string()
}

/// Elapsed time of each phase, in milliseconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PhaseTimings {
    pub build_ms: f64,
    pub preprocess_ms: f64,
    pub search_ms: f64,
}

impl PhaseTimings {
    pub fn new(build: Duration, preprocess: Duration, search: Duration) -> Self {
        PhaseTimings {
            build_ms: build.as_secs_f64() * 1000.0,
            preprocess_ms: preprocess.as_secs_f64() * 1000.0,
            search_ms: search.as_secs_f64() * 1000.0,
        }
    }

    pub fn total_ms(&self) -> f64 {
        self.build_ms + self.preprocess_ms + self.search_ms
    }
}

/// Everything the command line tool prints for one query
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub requested: usize,
    pub found: usize,
    pub costs: Vec<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<FoundPath<f64>>>,

    /// Whether every reconstructed path checked out, when verification ran
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timings: Option<PhaseTimings>,
}

impl RunReport {
    pub fn new(result: KPathResult<f64>) -> Self {
        RunReport {
            requested: result.requested,
            found: result.found(),
            costs: result.costs,
            paths: result.paths,
            verified: None,
            timings: None,
        }
    }

    pub fn with_timings(mut self, timings: PhaseTimings) -> Self {
        self.timings = Some(timings);
        self
    }

    pub fn with_verification(mut self, verified: bool) -> Self {
        self.verified = Some(verified);
        self
    }

    /// Renders costs as `c1, c2, ..., ck` on one line, then paths and timings if present
    pub fn render_text(&self) -> String {
        let costs: Vec<String> = self.costs.iter().map(|&cost| format_cost(cost)).collect();
        let mut text = costs.join(", ");
        text.push('\n');

        if let Some(paths) = &self.paths {
            for path in paths {
                let vertices: Vec<String> = path.vertices.iter().map(|v| v.to_string()).collect();
                text.push_str(&format!("{}: {}\n", format_cost(path.cost), vertices.join(" -> ")));
            }
        }

        if let Some(verified) = self.verified {
            text.push_str(if verified {
                "All paths verified.\n"
            } else {
                "Path verification FAILED.\n"
            });
        }

        if let Some(timings) = &self.timings {
            text.push_str(&format!("Building time: {} milliseconds.\n", timings.build_ms));
            text.push_str(&format!(
                "Preprocessing time: {} milliseconds.\n",
                timings.preprocess_ms
            ));
            text.push_str(&format!("Searching time: {} milliseconds.\n", timings.search_ms));
            text.push_str(&format!("Total time: {} milliseconds.\n", timings.total_ms()));
        }

        text
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => self.render_json(),
        }
    }
}
