//! Parameters shared by all constructors.

use serde::{Deserialize, Serialize};

use crate::error::ConstructionError;

/// How much of the instance to visit, and where to start.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::ConstructionParams;
///
/// let params = ConstructionParams::new().with_fraction(0.5).with_start_vertex(3);
/// assert_eq!(params.target_count(5), Ok(3));
/// assert!(ConstructionParams::new().with_fraction(0.0).target_count(5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructionParams {
    fraction: f64,
    start_vertex: usize,
}

impl Default for ConstructionParams {
    fn default() -> Self {
        Self {
            fraction: 1.0,
            start_vertex: 0,
        }
    }
}

impl ConstructionParams {
    /// Full tour from vertex 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fraction of vertices to include, in `(0, 1]`.
    pub fn with_fraction(mut self, fraction: f64) -> Self {
        self.fraction = fraction;
        self
    }

    /// Sets the vertex the tour starts and ends at.
    pub fn with_start_vertex(mut self, start_vertex: usize) -> Self {
        self.start_vertex = start_vertex;
        self
    }

    /// Fraction of vertices to include.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Start vertex.
    pub fn start_vertex(&self) -> usize {
        self.start_vertex
    }

    /// Validates the parameters against a matrix of `size` vertices and
    /// returns the number of distinct vertices the tour will hold,
    /// `ceil(fraction * size)`.
    pub fn target_count(&self, size: usize) -> Result<usize, ConstructionError> {
        if size < 2 {
            return Err(ConstructionError::TooFewVertices(size));
        }
        if !(self.fraction > 0.0 && self.fraction <= 1.0) {
            return Err(ConstructionError::InvalidFraction(self.fraction));
        }
        if self.start_vertex >= size {
            return Err(ConstructionError::StartOutOfRange {
                start: self.start_vertex,
                size,
            });
        }
        let target = (self.fraction * size as f64).ceil() as usize;
        Ok(target.clamp(1, size))
    }
}
