//! Benchmark results.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::evaluation::CostSummary;
use crate::models::TourResult;

/// One heuristic run from one start vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Heuristic name.
    pub method: String,
    /// Start vertex.
    pub start_vertex: usize,
    /// Tour weight.
    pub cost: i64,
    /// Closed visiting order.
    pub route: Vec<usize>,
}

/// Aggregate of one heuristic over all start vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicSummary {
    /// Heuristic name.
    pub method: String,
    /// Cost statistics.
    pub costs: CostSummary,
    /// Cheapest tour found.
    pub best: TourResult,
}

/// Everything a benchmark run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Instance name.
    pub instance: String,
    /// Fraction of vertices visited per tour.
    pub fraction: f64,
    /// Per-heuristic statistics, in heuristic order.
    pub meta: Vec<HeuristicSummary>,
    /// One entry per start vertex, each holding one record per heuristic.
    pub data: Vec<Vec<RunRecord>>,
}

impl BenchmarkReport {
    /// Summary for the named heuristic.
    pub fn summary(&self, method: &str) -> Option<&HeuristicSummary> {
        self.meta.iter().find(|s| s.method == method)
    }

    /// Start vertices in the order they were drawn.
    pub fn start_vertices(&self) -> Vec<usize> {
        self.data
            .iter()
            .filter_map(|runs| runs.first().map(|r| r.start_vertex))
            .collect()
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Writes pretty-printed JSON to `writer`.
    pub fn write_json<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, self)
    }
}
