//! Independent check of a constructor's output.

use thiserror::Error;

use crate::constructive::round_cost;
use crate::distance::DistanceMatrix;
use crate::models::TourResult;

/// A tour that does not match its declared cost or shape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VerificationError {
    /// Fewer than two route entries.
    #[error("route has {0} entries, a closed tour needs at least 2")]
    TooShort(usize),
    /// First and last entries differ.
    #[error("route starts at {first} but ends at {last}")]
    NotClosed {
        /// First entry.
        first: usize,
        /// Last entry.
        last: usize,
    },
    /// A vertex id outside the matrix.
    #[error("vertex {vertex} is out of range for {size} vertices")]
    UnknownVertex {
        /// Offending id.
        vertex: usize,
        /// Number of vertices.
        size: usize,
    },
    /// A vertex visited twice before the closing entry.
    #[error("vertex {0} is visited more than once")]
    DuplicateVertex(usize),
    /// Distinct vertex count differs from what was requested.
    #[error("route visits {actual} vertices, expected {expected}")]
    VertexCount {
        /// Requested number of vertices.
        expected: usize,
        /// Vertices in the route.
        actual: usize,
    },
    /// Declared cost differs from the recomputed edge sum.
    #[error("declared cost {declared} does not match recomputed cost {recomputed}")]
    CostMismatch {
        /// Cost reported by the constructor.
        declared: i64,
        /// Sum of the route's edge weights.
        recomputed: f64,
    },
}

/// Sum of the weights of consecutive route entries.
///
/// A repeated entry (the closing edge of a one-vertex tour) weighs zero.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::evaluation::route_cost;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(route_cost(&dm, &[0, 1, 2, 0]), 6.0);
/// ```
pub fn route_cost(distances: &DistanceMatrix, route: &[usize]) -> f64 {
    route
        .windows(2)
        .map(|w| distances.edge_weight(w[0], w[1]))
        .sum()
}

/// Checks that `result` is a closed tour over `expected_vertices` distinct
/// vertices whose declared cost equals its recomputed edge sum.
pub fn verify_tour(
    distances: &DistanceMatrix,
    result: &TourResult,
    expected_vertices: usize,
) -> Result<(), VerificationError> {
    let route = &result.route;
    let (&first, &last) = match (route.first(), route.last()) {
        (Some(first), Some(last)) if route.len() >= 2 => (first, last),
        _ => return Err(VerificationError::TooShort(route.len())),
    };
    if first != last {
        return Err(VerificationError::NotClosed { first, last });
    }

    let size = distances.size();
    let mut seen = vec![false; size];
    for &vertex in &route[..route.len() - 1] {
        if vertex >= size {
            return Err(VerificationError::UnknownVertex { vertex, size });
        }
        if std::mem::replace(&mut seen[vertex], true) {
            return Err(VerificationError::DuplicateVertex(vertex));
        }
    }

    let actual = route.len() - 1;
    if actual != expected_vertices {
        return Err(VerificationError::VertexCount {
            expected: expected_vertices,
            actual,
        });
    }

    let recomputed = route_cost(distances, route);
    if round_cost(recomputed) != result.cost {
        return Err(VerificationError::CostMismatch {
            declared: result.cost,
            recomputed,
        });
    }
    Ok(())
}
