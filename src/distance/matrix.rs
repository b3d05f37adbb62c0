//! Dense distance matrix.

use thiserror::Error;

use crate::models::{Point, UnvisitedSet};

/// Rejected matrix input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Flat data length does not match `size * size`.
    #[error("expected {expected} entries for a square matrix, got {actual}")]
    WrongLength {
        /// `size * size`.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
    /// A row has a different length than the number of rows.
    #[error("row {row} has {len} entries, expected {size}")]
    NotSquare {
        /// Offending row index.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Number of rows.
        size: usize,
    },
    /// An off-diagonal entry is NaN, infinite, or negative.
    #[error("entry ({from}, {to}) = {value} is not a finite non-negative distance")]
    InvalidEntry {
        /// Row index.
        from: usize,
        /// Column index.
        to: usize,
        /// Rejected value.
        value: f64,
    },
}

/// A dense n×n distance matrix stored in row-major order.
///
/// The diagonal never describes an edge: [`get`](Self::get) returns `None`
/// for `from == to`, whatever value the input carried there (input data
/// usually marks it with `f64::INFINITY`). Off-diagonal entries are finite
/// and non-negative.
///
/// Constructors only read the matrix, so a single instance can be shared by
/// any number of concurrent constructions.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
/// use u_tour::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new(1, 0.0, 0.0),
///     Point::new(2, 3.0, 4.0),
///     Point::new(3, 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(dm.get(0, 1), Some(5.0));
/// assert_eq!(dm.get(1, 1), None);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the matrix of rounded Euclidean distances between points.
    pub fn from_points(points: &[Point]) -> Self {
        let size = points.len();
        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let d = points[i].distance_to(&points[j]);
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }
        Self { data, size }
    }

    /// Creates a matrix from an explicit row-major n×n grid.
    ///
    /// Diagonal values are ignored.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        if data.len() != size * size {
            return Err(MatrixError::WrongLength {
                expected: size * size,
                actual: data.len(),
            });
        }
        let mut dm = Self { data, size };
        dm.normalize()?;
        Ok(dm)
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tour::distance::DistanceMatrix;
    ///
    /// let inf = f64::INFINITY;
    /// let dm = DistanceMatrix::from_rows(vec![vec![inf, 5.0], vec![5.0, inf]]).unwrap();
    /// assert_eq!(dm.get(1, 0), Some(5.0));
    /// assert!(DistanceMatrix::from_rows(vec![vec![inf, 5.0], vec![5.0]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(MatrixError::NotSquare {
                    row,
                    len: values.len(),
                    size,
                });
            }
            data.extend(values);
        }
        let mut dm = Self { data, size };
        dm.normalize()?;
        Ok(dm)
    }

    /// Checks the off-diagonal entries and zeroes the diagonal.
    fn normalize(&mut self) -> Result<(), MatrixError> {
        for from in 0..self.size {
            for to in 0..self.size {
                let idx = from * self.size + to;
                if from == to {
                    self.data[idx] = 0.0;
                    continue;
                }
                let value = self.data[idx];
                if !value.is_finite() || value < 0.0 {
                    return Err(MatrixError::InvalidEntry { from, to, value });
                }
            }
        }
        Ok(())
    }

    /// Returns the distance from `from` to `to`, or `None` on the diagonal.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        if from == to {
            None
        } else {
            Some(self.data[from * self.size + to])
        }
    }

    /// Weight of the edge `(from, to)`, counting a self edge as zero.
    ///
    /// This is the weight of the degenerate closing edge of a one-vertex cycle.
    #[inline]
    pub fn edge_weight(&self, from: usize, to: usize) -> f64 {
        self.get(from, to).unwrap_or(0.0)
    }

    /// Number of vertices in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.edge_weight(i, j) - self.edge_weight(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the unvisited vertex nearest to `from`.
    ///
    /// Ties go to the lowest vertex id. Returns `None` if nothing is left.
    pub fn nearest(&self, from: usize, unvisited: &UnvisitedSet) -> Option<(usize, f64)> {
        if unvisited.is_empty() {
            return None;
        }
        let mut best: Option<(usize, f64)> = None;
        for to in unvisited.iter().filter(|&to| to != from) {
            let d = self.edge_weight(from, to);
            if best.is_none_or(|(_, b)| d < b) {
                best = Some((to, d));
            }
        }
        best
    }
}
