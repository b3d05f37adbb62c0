//! Output of a tour construction.

use serde::{Deserialize, Serialize};

/// A closed tour and its total weight.
///
/// `route` starts and ends at the start vertex; every other entry is a
/// distinct vertex.
///
/// # Examples
///
/// ```
/// use u_tour::models::TourResult;
///
/// let result = TourResult::new(10, vec![0, 1, 0]);
/// assert_eq!(result.num_vertices(), 2);
/// assert_eq!(result.into_parts(), (10, vec![0, 1, 0]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TourResult {
    /// Total tour weight, rounded to the nearest integer.
    pub cost: i64,
    /// Visiting order, closed by repeating the start vertex.
    pub route: Vec<usize>,
}

impl TourResult {
    /// Creates a new result.
    pub fn new(cost: i64, route: Vec<usize>) -> Self {
        Self { cost, route }
    }

    /// Number of distinct vertices visited.
    pub fn num_vertices(&self) -> usize {
        self.route.len().saturating_sub(1)
    }

    /// Splits into `(cost, route)`.
    pub fn into_parts(self) -> (i64, Vec<usize>) {
        (self.cost, self.route)
    }
}
