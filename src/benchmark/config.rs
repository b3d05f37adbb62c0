//! Benchmark configuration.

use serde::{Deserialize, Serialize};

/// Settings for [`run_benchmark`](super::run_benchmark).
///
/// Missing fields take their defaults when deserialized.
///
/// # Examples
///
/// ```
/// use u_tour::benchmark::BenchmarkConfig;
///
/// let config: BenchmarkConfig = serde_json::from_str(r#"{"repeats": 3}"#).unwrap();
/// assert_eq!(config.repeats, 3);
/// assert_eq!(config.fraction, 0.5);
/// assert_eq!(config.seed, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Fraction of vertices each tour visits.
    pub fraction: f64,
    /// Number of distinct start vertices to try.
    pub repeats: usize,
    /// Seed for drawing start vertices.
    pub seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            fraction: 0.5,
            repeats: 10,
            seed: 42,
        }
    }
}

impl BenchmarkConfig {
    /// Sets the fraction of vertices to visit.
    pub fn with_fraction(mut self, fraction: f64) -> Self {
        self.fraction = fraction;
        self
    }

    /// Sets the number of start vertices.
    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
