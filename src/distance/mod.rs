//! Distance matrices.
//!
//! Provides a dense, read-only distance matrix with an explicit diagonal.

mod matrix;

pub use matrix::{DistanceMatrix, MatrixError};
