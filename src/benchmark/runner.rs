//! Benchmark driver.

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::constructive::{ConstructionParams, Heuristic, TourConstructor};
use crate::error::ConstructionError;
use crate::evaluation::{verify_tour, CostSummary, VerificationError};
use crate::instance::Instance;
use crate::models::TourResult;

use super::{BenchmarkConfig, BenchmarkReport, HeuristicSummary, RunRecord};

/// Failure while running a benchmark.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BenchmarkError {
    /// No heuristics or zero repetitions were requested.
    #[error("benchmark needs at least one heuristic and one repetition")]
    Empty,
    /// More distinct start vertices requested than the instance has.
    #[error("cannot draw {repeats} distinct start vertices from {vertices}")]
    TooManyRepeats {
        /// Requested repetitions.
        repeats: usize,
        /// Vertices in the instance.
        vertices: usize,
    },
    /// A constructor rejected its arguments.
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    /// A constructor returned a tour that failed verification.
    #[error("{method} produced an invalid tour from vertex {start_vertex}")]
    Verification {
        /// Heuristic name.
        method: String,
        /// Start vertex of the failing run.
        start_vertex: usize,
        /// What was wrong with the tour.
        #[source]
        source: VerificationError,
    },
}

/// Runs every heuristic from `config.repeats` distinct random start vertices.
///
/// Start vertices are drawn without replacement from a [`StdRng`] seeded
/// with `config.seed`, so a report is reproducible. Every tour is checked
/// with [`verify_tour`]; a failed check aborts the benchmark.
///
/// # Examples
///
/// ```
/// use u_tour::benchmark::{run_benchmark, BenchmarkConfig};
/// use u_tour::constructive::Heuristic;
/// use u_tour::instance::Instance;
///
/// let text = "NAME: square.tsp\n1 0 0\n2 4 0\n3 4 3\n4 0 3\n";
/// let instance = Instance::parse(text).unwrap();
/// let config = BenchmarkConfig::default().with_fraction(1.0).with_repeats(2);
///
/// let report = run_benchmark(&instance, &config, &Heuristic::all()).unwrap();
/// assert_eq!(report.data.len(), 2);
/// assert_eq!(report.summary("cheapest_insertion").unwrap().costs.min, 14);
/// ```
#[instrument(skip_all, fields(instance = instance.name(), repeats = config.repeats))]
pub fn run_benchmark(
    instance: &Instance,
    config: &BenchmarkConfig,
    heuristics: &[Heuristic],
) -> Result<BenchmarkReport, BenchmarkError> {
    if heuristics.is_empty() || config.repeats == 0 {
        return Err(BenchmarkError::Empty);
    }
    let distances = instance.distance_matrix();
    let vertices = distances.size();
    if config.repeats > vertices {
        return Err(BenchmarkError::TooManyRepeats {
            repeats: config.repeats,
            vertices,
        });
    }

    let base = ConstructionParams::new().with_fraction(config.fraction);
    let target = base.target_count(vertices)?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let starts = rand::seq::index::sample(&mut rng, vertices, config.repeats).into_vec();

    let mut data = Vec::with_capacity(starts.len());
    for &start in &starts {
        let params = base.with_start_vertex(start);
        let mut runs = Vec::with_capacity(heuristics.len());
        for heuristic in heuristics {
            let result = heuristic.construct(&distances, &params)?;
            verify_tour(&distances, &result, target).map_err(|source| {
                BenchmarkError::Verification {
                    method: heuristic.name().to_string(),
                    start_vertex: start,
                    source,
                }
            })?;
            debug!(method = heuristic.name(), start, cost = result.cost, "run verified");
            runs.push(RunRecord {
                method: heuristic.name().to_string(),
                start_vertex: start,
                cost: result.cost,
                route: result.route,
            });
        }
        data.push(runs);
    }

    let meta = heuristics
        .iter()
        .enumerate()
        .filter_map(|(idx, heuristic)| summarize(heuristic.name(), data.iter().map(|runs| &runs[idx])))
        .collect();

    Ok(BenchmarkReport {
        instance: instance.name().to_string(),
        fraction: config.fraction,
        meta,
        data,
    })
}

/// Cost statistics and the cheapest tour (lowest route on ties).
fn summarize<'a>(
    method: &str,
    runs: impl Iterator<Item = &'a RunRecord> + Clone,
) -> Option<HeuristicSummary> {
    let costs = CostSummary::from_costs(runs.clone().map(|r| r.cost))?;
    let best = runs.min_by(|a, b| a.cost.cmp(&b.cost).then_with(|| a.route.cmp(&b.route)))?;
    Some(HeuristicSummary {
        method: method.to_string(),
        costs,
        best: TourResult::new(best.cost, best.route.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE: &str = "NAME: five.tsp\n1 7 18\n2 3 10\n3 0 0\n4 0 20\n5 17 0\n";

    fn five() -> Instance {
        Instance::parse(FIVE).expect("valid")
    }

    #[test]
    fn test_benchmark_shape() {
        let config = BenchmarkConfig::default().with_repeats(3);
        let report = run_benchmark(&five(), &config, &Heuristic::all()).expect("valid");
        assert_eq!(report.instance, "five");
        assert_eq!(report.data.len(), 3);
        assert!(report.data.iter().all(|runs| runs.len() == 3));
        assert_eq!(report.meta.len(), 3);

        let starts = report.start_vertices();
        let mut distinct = starts.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(distinct.len(), 3);
        assert!(starts.iter().all(|&s| s < 5));

        // fraction 0.5 of 5 vertices = 3 per tour
        for runs in &report.data {
            for run in runs {
                assert_eq!(run.route.len(), 4);
                assert_eq!(run.route.first(), Some(&run.start_vertex));
            }
        }
    }

    #[test]
    fn test_benchmark_reproducible() {
        let config = BenchmarkConfig::default().with_repeats(4).with_seed(7);
        let a = run_benchmark(&five(), &config, &Heuristic::all()).expect("valid");
        let b = run_benchmark(&five(), &config, &Heuristic::all()).expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_benchmark_summary_matches_runs() {
        let config = BenchmarkConfig::default().with_fraction(1.0).with_repeats(5);
        let report =
            run_benchmark(&five(), &config, &[Heuristic::CheapestInsertion]).expect("valid");
        let summary = report.summary("cheapest_insertion").expect("present");
        let costs: Vec<i64> = report.data.iter().map(|runs| runs[0].cost).collect();
        assert_eq!(summary.costs.min, *costs.iter().min().expect("non-empty"));
        assert_eq!(summary.costs.max, *costs.iter().max().expect("non-empty"));
        assert_eq!(summary.best.cost, summary.costs.min);
    }

    #[test]
    fn test_benchmark_too_many_repeats() {
        let config = BenchmarkConfig::default().with_repeats(6);
        assert_eq!(
            run_benchmark(&five(), &config, &Heuristic::all()),
            Err(BenchmarkError::TooManyRepeats {
                repeats: 6,
                vertices: 5
            })
        );
    }

    #[test]
    fn test_benchmark_empty() {
        let config = BenchmarkConfig::default();
        assert_eq!(
            run_benchmark(&five(), &config, &[]),
            Err(BenchmarkError::Empty)
        );
        let none = BenchmarkConfig::default().with_repeats(0);
        assert_eq!(
            run_benchmark(&five(), &none, &Heuristic::all()),
            Err(BenchmarkError::Empty)
        );
    }

    #[test]
    fn test_benchmark_rejects_bad_fraction() {
        let config = BenchmarkConfig::default().with_fraction(0.0).with_repeats(1);
        assert_eq!(
            run_benchmark(&five(), &config, &Heuristic::all()),
            Err(BenchmarkError::Construction(
                ConstructionError::InvalidFraction(0.0)
            ))
        );
    }
}
