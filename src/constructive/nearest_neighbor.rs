//! Nearest-neighbor constructive heuristic.
//!
//! Grows an open path from the start vertex, always appending the unvisited
//! vertex nearest to the current endpoint, then closes it back to the start.
//!
//! # Complexity
//!
//! O(steps × n): each step scans one row of the matrix.

use tracing::{debug, trace};

use crate::distance::DistanceMatrix;
use crate::error::ConstructionError;
use crate::models::{Tour, TourResult, UnvisitedSet};

use super::{round_cost, ConstructionParams};

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// Ties between equally near vertices go to the lowest vertex id. The matrix
/// is only read; visited vertices are tracked in an [`UnvisitedSet`].
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::constructive::{nearest_neighbor, ConstructionParams};
///
/// let points = vec![
///     Point::new(1, 0.0, 0.0),
///     Point::new(2, 1.0, 0.0),
///     Point::new(3, 2.0, 0.0),
///     Point::new(4, 3.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
///
/// let result = nearest_neighbor(&dm, &ConstructionParams::new()).unwrap();
/// assert_eq!(result.route, vec![0, 1, 2, 3, 0]);
/// assert_eq!(result.cost, 6);
/// ```
pub fn nearest_neighbor(
    distances: &DistanceMatrix,
    params: &ConstructionParams,
) -> Result<TourResult, ConstructionError> {
    let target = params.target_count(distances.size())?;
    let start = params.start_vertex();

    let mut unvisited = UnvisitedSet::all_except(distances.size(), start);
    let mut tour = Tour::open(start);
    let mut cost = 0.0;

    for _ in 1..target {
        let current = tour.end().unwrap_or(start);
        let Some((next, d)) = distances.nearest(current, &unvisited) else {
            break;
        };
        cost += d;
        tour.push(next);
        let removed = unvisited.remove(next);
        debug_assert!(removed, "appended vertex must have been unvisited");
        trace!(vertex = next, distance = d, cost, "nearest neighbor step");
    }

    let last = tour.end().unwrap_or(start);
    cost += distances.edge_weight(last, start);
    tour.close();
    debug_assert_eq!(tour.distinct_len(), target);
    debug_assert_eq!(unvisited.len(), distances.size() - target);

    debug!(start, target, cost, "nearest neighbor tour built");
    Ok(TourResult::new(round_cost(cost), tour.into_route()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn line_matrix() -> DistanceMatrix {
        let points: Vec<Point> = (0..4).map(|i| Point::new(i + 1, i as f64, 0.0)).collect();
        DistanceMatrix::from_points(&points)
    }

    #[test]
    fn test_nn_two_vertices() {
        let inf = f64::INFINITY;
        let dm = DistanceMatrix::from_rows(vec![vec![inf, 5.0], vec![5.0, inf]]).expect("valid");
        let result = nearest_neighbor(&dm, &ConstructionParams::new()).expect("valid input");
        assert_eq!(result, TourResult::new(10, vec![0, 1, 0]));
    }

    #[test]
    fn test_nn_line_from_middle() {
        let dm = line_matrix();
        let params = ConstructionParams::new().with_start_vertex(1);
        let result = nearest_neighbor(&dm, &params).expect("valid input");
        // From 1, vertices 0 and 2 tie at distance 1; the lower id wins
        assert_eq!(result.route, vec![1, 0, 2, 3, 1]);
        assert_eq!(result.cost, 1 + 2 + 1 + 2);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let points = vec![
            Point::new(1, 0.0, 0.0),
            Point::new(2, 10.0, 0.0),
            Point::new(3, 1.0, 0.0),
        ];
        let dm = DistanceMatrix::from_points(&points);
        let result = nearest_neighbor(&dm, &ConstructionParams::new()).expect("valid input");
        assert_eq!(result.route, vec![0, 2, 1, 0]);
        assert_eq!(result.cost, 1 + 9 + 10);
    }

    #[test]
    fn test_nn_partial_tour() {
        let dm = line_matrix();
        let params = ConstructionParams::new().with_fraction(0.5);
        let result = nearest_neighbor(&dm, &params).expect("valid input");
        assert_eq!(result.route, vec![0, 1, 0]);
        assert_eq!(result.cost, 2);
    }

    #[test]
    fn test_nn_partial_leaves_remaining_unvisited() {
        let points: Vec<Point> = (0..7).map(|i| Point::new(i + 1, (i * i) as f64, 0.0)).collect();
        let dm = DistanceMatrix::from_points(&points);
        let params = ConstructionParams::new().with_fraction(0.5).with_start_vertex(6);
        let result = nearest_neighbor(&dm, &params).expect("valid input");
        // ceil(0.5 * 7) = 4 visited, 3 left
        let left = (0..7).filter(|v| !result.route.contains(v)).count();
        assert_eq!(result.route.len(), 5);
        assert_eq!(left, 3);
    }

    #[test]
    fn test_nn_cost_rounds_half_to_even() {
        let inf = f64::INFINITY;
        let dm = DistanceMatrix::from_rows(vec![vec![inf, 1.25], vec![1.25, inf]]).expect("valid");
        let result = nearest_neighbor(&dm, &ConstructionParams::new()).expect("valid input");
        // Tour weight 2.5
        assert_eq!(result.cost, 2);
    }

    #[test]
    fn test_nn_single_vertex_target() {
        let dm = line_matrix();
        let params = ConstructionParams::new().with_fraction(0.1).with_start_vertex(2);
        let result = nearest_neighbor(&dm, &params).expect("valid input");
        assert_eq!(result, TourResult::new(0, vec![2, 2]));
    }

    #[test]
    fn test_nn_does_not_touch_matrix() {
        let dm = line_matrix();
        let before = dm.clone();
        nearest_neighbor(&dm, &ConstructionParams::new()).expect("valid input");
        assert_eq!(dm, before);
    }

    #[test]
    fn test_nn_rejects_bad_start() {
        let dm = line_matrix();
        let params = ConstructionParams::new().with_start_vertex(9);
        assert_eq!(
            nearest_neighbor(&dm, &params),
            Err(ConstructionError::StartOutOfRange { start: 9, size: 4 })
        );
    }
}
