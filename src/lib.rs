//! # u-tour
//!
//! Greedy construction heuristics for the traveling salesman problem, for
//! comparing tour quality across strategies and start vertices.
//!
//! ## Modules
//!
//! - [`distance`] — Read-only distance matrix with an explicit diagonal
//! - [`models`] — Domain types (Point, Tour, UnvisitedSet, Candidate, TourResult)
//! - [`constructive`] — Nearest neighbor, cheapest insertion, regret-k insertion
//! - [`evaluation`] — Cost recomputation, tour verification, cost statistics
//! - [`instance`] — Coordinate instance reader
//! - [`benchmark`] — Seeded side-by-side runs with JSON reports
//!
//! ## Example
//!
//! ```
//! use u_tour::distance::DistanceMatrix;
//! use u_tour::constructive::{regret_insertion, ConstructionParams};
//!
//! let inf = f64::INFINITY;
//! let dm = DistanceMatrix::from_rows(vec![vec![inf, 5.0], vec![5.0, inf]]).unwrap();
//! let (cost, route) = regret_insertion(&dm, &ConstructionParams::new(), 2)
//!     .unwrap()
//!     .into_parts();
//! assert_eq!(cost, 10);
//! assert_eq!(route, vec![0, 1, 0]);
//! ```

pub mod benchmark;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod instance;
pub mod models;

pub use error::ConstructionError;
