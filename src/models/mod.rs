//! Domain model types for tour construction.
//!
//! Provides planar points, the growing tour, the set of vertices still to
//! visit, ordered selection keys for insertion steps, and the result returned
//! by every constructor.

mod candidate;
mod point;
mod result;
mod tour;
mod unvisited;

pub use candidate::{Candidate, RegretKey};
pub use point::Point;
pub use result::TourResult;
pub use tour::Tour;
pub use unvisited::UnvisitedSet;
