//! Uniform interface over the constructors.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::ConstructionError;
use crate::models::TourResult;

use super::{
    cheapest_insertion, nearest_neighbor, regret_insertion, ConstructionParams, DEFAULT_REGRET_K,
};

/// A tour construction heuristic.
pub trait TourConstructor {
    /// Short identifier used in reports.
    fn name(&self) -> &str;

    /// Builds a tour over `distances`.
    fn construct(
        &self,
        distances: &DistanceMatrix,
        params: &ConstructionParams,
    ) -> Result<TourResult, ConstructionError>;
}

/// The available construction heuristics.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::constructive::{ConstructionParams, Heuristic, TourConstructor};
///
/// let dm = DistanceMatrix::from_rows(vec![vec![0.0, 5.0], vec![5.0, 0.0]]).unwrap();
/// for heuristic in Heuristic::all() {
///     let result = heuristic.construct(&dm, &ConstructionParams::new()).unwrap();
///     assert_eq!(result.cost, 10);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// [`nearest_neighbor`]
    NearestNeighbor,
    /// [`cheapest_insertion`]
    CheapestInsertion,
    /// [`regret_insertion`] with breadth `k`.
    RegretInsertion {
        /// Number of cheapest alternatives the regret sums over.
        k: usize,
    },
}

impl Heuristic {
    /// All three heuristics, regret with the default breadth.
    pub fn all() -> [Heuristic; 3] {
        [
            Heuristic::NearestNeighbor,
            Heuristic::CheapestInsertion,
            Heuristic::RegretInsertion {
                k: DEFAULT_REGRET_K,
            },
        ]
    }
}

impl TourConstructor for Heuristic {
    fn name(&self) -> &str {
        match self {
            Heuristic::NearestNeighbor => "nearest_neighbor",
            Heuristic::CheapestInsertion => "cheapest_insertion",
            Heuristic::RegretInsertion { .. } => "regret_insertion",
        }
    }

    fn construct(
        &self,
        distances: &DistanceMatrix,
        params: &ConstructionParams,
    ) -> Result<TourResult, ConstructionError> {
        match *self {
            Heuristic::NearestNeighbor => nearest_neighbor(distances, params),
            Heuristic::CheapestInsertion => cheapest_insertion(distances, params),
            Heuristic::RegretInsertion { k } => regret_insertion(distances, params, k),
        }
    }
}
