//! Cheapest-insertion constructive heuristic.
//!
//! # Algorithm
//!
//! Starts from the degenerate cycle `[start, start]`. At every step, for
//! every unvisited vertex `c` and every tour edge `(a, b)`, computes
//!
//! ```text
//! Δ = d(a, c) + d(c, b) - d(a, b)
//! ```
//!
//! and splices in the single globally cheapest `(c, a)` pair. The closing
//! self edge of the one-vertex cycle weighs zero.
//!
//! # Complexity
//!
//! O(steps × n × tour length); every step recomputes all insertions.

use tracing::{debug, trace};

use crate::distance::DistanceMatrix;
use crate::error::ConstructionError;
use crate::models::{Candidate, Tour, TourResult, UnvisitedSet};

use super::{insertion_cost, round_cost, ConstructionParams};

/// Constructs a tour using the cheapest-insertion heuristic.
///
/// Ties are broken by tour weight, then by edge source id, then by the
/// inserted vertex id.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::constructive::{cheapest_insertion, ConstructionParams};
///
/// let points = vec![
///     Point::new(1, 0.0, 0.0),
///     Point::new(2, 1.0, 0.0),
///     Point::new(3, 1.0, 1.0),
///     Point::new(4, 0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
///
/// let result = cheapest_insertion(&dm, &ConstructionParams::new()).unwrap();
/// assert_eq!(result.route, vec![0, 3, 2, 1, 0]);
/// assert_eq!(result.cost, 4);
/// ```
pub fn cheapest_insertion(
    distances: &DistanceMatrix,
    params: &ConstructionParams,
) -> Result<TourResult, ConstructionError> {
    let target = params.target_count(distances.size())?;
    let start = params.start_vertex();

    let mut unvisited = UnvisitedSet::all_except(distances.size(), start);
    let mut tour = Tour::closed(start);
    let mut cost = 0.0;

    for _ in 1..target {
        let running = cost;
        let best = unvisited
            .iter()
            .flat_map(|vertex| {
                tour.edges().map(move |(a, b)| {
                    Candidate::new(insertion_cost(distances, running, a, vertex, b), a, vertex)
                })
            })
            .min();
        let Some(best) = best else {
            break;
        };

        let inserted = tour.insert_after(best.source, best.vertex);
        debug_assert!(inserted, "edge source must be on the tour");
        let removed = unvisited.remove(best.vertex);
        debug_assert!(removed, "inserted vertex must have been unvisited");
        cost = best.cost;
        trace!(
            vertex = best.vertex,
            source = best.source,
            cost,
            "cheapest insertion step"
        );
    }

    debug_assert_eq!(tour.distinct_len(), target);
    debug_assert_eq!(unvisited.len(), distances.size() - target);

    debug!(start, target, cost, "cheapest insertion tour built");
    Ok(TourResult::new(round_cost(cost), tour.into_route()))
}
