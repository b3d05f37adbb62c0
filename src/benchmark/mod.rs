//! Side-by-side comparison of the heuristics over repeated start vertices.
//!
//! - [`BenchmarkConfig`] — fraction, repetition count, and RNG seed
//! - [`run_benchmark`] — runs, verifies, and summarizes every heuristic
//! - [`BenchmarkReport`] — JSON-serializable results

mod config;
mod report;
mod runner;

pub use config::BenchmarkConfig;
pub use report::{BenchmarkReport, HeuristicSummary, RunRecord};
pub use runner::{run_benchmark, BenchmarkError};
