//! Constructive heuristics for building TSP tours.
//!
//! - [`nearest_neighbor`] — Greedy path extension from the current endpoint, O(steps·n)
//! - [`cheapest_insertion`] — Globally cheapest edge split per step, O(steps·n·len)
//! - [`regret_insertion`] — Regret-k ranked insertion, O(steps·n·len·log len)
//!
//! Every constructor takes a read-only [`DistanceMatrix`] and a
//! [`ConstructionParams`], performs `ceil(fraction · n) - 1` steps, and
//! returns a closed [`TourResult`](crate::models::TourResult).

mod cheapest_insertion;
mod heuristic;
mod nearest_neighbor;
mod params;
mod regret_insertion;

pub use cheapest_insertion::cheapest_insertion;
pub use heuristic::{Heuristic, TourConstructor};
pub use nearest_neighbor::nearest_neighbor;
pub use params::ConstructionParams;
pub use regret_insertion::{regret_insertion, DEFAULT_REGRET_K};

use crate::distance::DistanceMatrix;

/// Tour weight after splicing `vertex` into the edge `(a, b)`.
///
/// A self edge `(a, a)` weighs zero, so the first insertion into the
/// one-vertex cycle costs `2 · d(a, vertex)`.
#[inline]
pub(crate) fn insertion_cost(
    distances: &DistanceMatrix,
    running: f64,
    a: usize,
    vertex: usize,
    b: usize,
) -> f64 {
    let added = distances.edge_weight(a, vertex) + distances.edge_weight(vertex, b);
    running + (added - distances.edge_weight(a, b))
}

/// Rounds an accumulated tour weight to the reported integer cost.
///
/// Halfway values round to even, matching [`Point::distance_to`](crate::models::Point::distance_to).
#[inline]
pub(crate) fn round_cost(cost: f64) -> i64 {
    cost.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_cost_self_edge_is_free() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0, 3.0], vec![3.0, 0.0]]).expect("valid");
        assert_eq!(insertion_cost(&dm, 0.0, 0, 1, 0), 6.0);
    }

    #[test]
    fn test_insertion_cost_subtracts_replaced_edge() {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 4.0, 3.0],
            vec![4.0, 0.0, 5.0],
            vec![3.0, 5.0, 0.0],
        ])
        .expect("valid");
        // Tour 0-1-0 weighs 8; splitting (0, 1) with 2 adds 3 + 5 - 4
        assert_eq!(insertion_cost(&dm, 8.0, 0, 2, 1), 12.0);
    }

    #[test]
    fn test_round_cost() {
        assert_eq!(round_cost(9.4), 9);
        assert_eq!(round_cost(9.5), 10);
        assert_eq!(round_cost(10.5), 10);
        assert_eq!(round_cost(2.5), 2);
        assert_eq!(round_cost(12.0), 12);
    }
}
