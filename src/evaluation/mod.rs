//! Tour cost recomputation, verification, and cost statistics.

mod summary;
mod verify;

pub use summary::CostSummary;
pub use verify::{route_cost, verify_tour, VerificationError};
