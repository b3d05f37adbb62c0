//! Argument errors reported by the tour constructors.

use thiserror::Error;

/// Invalid input passed to a tour constructor.
///
/// Every variant is detected before the first construction step, so a
/// constructor either returns a complete tour or one of these errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstructionError {
    /// The vertex fraction is not a finite number in `(0, 1]`.
    #[error("vertex fraction must lie in (0, 1], got {0}")]
    InvalidFraction(f64),
    /// The matrix holds fewer than two vertices.
    #[error("distance matrix needs at least 2 vertices, got {0}")]
    TooFewVertices(usize),
    /// The start vertex is not an index of the matrix.
    #[error("start vertex {start} is out of range for {size} vertices")]
    StartOutOfRange {
        /// Requested start vertex.
        start: usize,
        /// Number of vertices in the matrix.
        size: usize,
    },
    /// Regret breadth `k` must be at least 1.
    #[error("regret breadth must be at least 1")]
    InvalidRegretBreadth,
}
