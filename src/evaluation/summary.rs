//! Cost statistics over repeated runs.

use serde::{Deserialize, Serialize};

/// Minimum, mean, and maximum of a set of tour costs.
///
/// # Examples
///
/// ```
/// use u_tour::evaluation::CostSummary;
///
/// let summary = CostSummary::from_costs([12, 10, 17]).unwrap();
/// assert_eq!(summary.min, 10);
/// assert_eq!(summary.max, 17);
/// assert!((summary.mean - 13.0).abs() < 1e-10);
/// assert!(CostSummary::from_costs([]).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Lowest cost.
    pub min: i64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Highest cost.
    pub max: i64,
}

impl CostSummary {
    /// Summarizes `costs`, or `None` if there are none.
    pub fn from_costs(costs: impl IntoIterator<Item = i64>) -> Option<Self> {
        let mut count = 0usize;
        let mut total = 0.0;
        let mut min = i64::MAX;
        let mut max = i64::MIN;
        for cost in costs {
            count += 1;
            total += cost as f64;
            min = min.min(cost);
            max = max.max(cost);
        }
        (count > 0).then(|| Self {
            min,
            mean: total / count as f64,
            max,
        })
    }
}
