//! Coordinate instance reader.
//!
//! The format is a minimal subset of TSPLIB `EUC_2D` files:
//!
//! ```text
//! NAME: kroA100.tsp
//! COMMENT: anything
//! NODE_COORD_SECTION
//! 1 1380 939
//! 2 2848 96
//! EOF
//! ```
//!
//! The instance name is the second token of the first line, without its file
//! extension. Lines whose first token starts with a digit are `id x y`
//! records; all other lines are skipped.

use std::io::BufRead;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::distance::DistanceMatrix;
use crate::models::Point;

/// Malformed instance input.
#[derive(Error, Debug)]
pub enum InstanceError {
    /// Reading the underlying source failed.
    #[error("failed to read instance")]
    Io(#[from] std::io::Error),
    /// The first line does not carry a name.
    #[error("first line must hold the instance name as its second token")]
    MissingName,
    /// A coordinate record could not be parsed.
    #[error("line {line}: expected 'id x y', got '{content}'")]
    InvalidRecord {
        /// 1-based line number.
        line: usize,
        /// Raw line.
        content: String,
    },
    /// Record ids must run `1, 2, 3, ...`.
    #[error("line {line}: expected point id {expected}, got {found}")]
    UnexpectedId {
        /// 1-based line number.
        line: usize,
        /// Next id in sequence.
        expected: usize,
        /// Id found.
        found: usize,
    },
    /// No coordinate records were found.
    #[error("instance has no points")]
    NoPoints,
}

/// A named set of points.
///
/// # Examples
///
/// ```
/// use u_tour::instance::Instance;
///
/// let text = "NAME: square.tsp\nNODE_COORD_SECTION\n1 0 0\n2 1 0\n3 1 1\n4 0 1\nEOF\n";
/// let instance = Instance::parse(text).unwrap();
/// assert_eq!(instance.name(), "square");
/// assert_eq!(instance.len(), 4);
///
/// let dm = instance.distance_matrix();
/// assert_eq!(dm.get(0, 2), Some(1.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    name: String,
    points: Vec<Point>,
}

impl Instance {
    /// Creates an instance from already loaded points.
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Parses an instance from text.
    pub fn parse(text: &str) -> Result<Self, InstanceError> {
        Self::from_reader(text.as_bytes())
    }

    /// Reads an instance line by line.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, InstanceError> {
        let mut lines = reader.lines();

        let header = lines.next().transpose()?.ok_or(InstanceError::MissingName)?;
        let name = header
            .split_whitespace()
            .nth(1)
            .and_then(|file| file.split('.').next())
            .filter(|name| !name.is_empty())
            .ok_or(InstanceError::MissingName)?
            .to_string();

        let mut points = Vec::new();
        for (idx, line) in lines.enumerate() {
            let line = line?;
            let number = idx + 2;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let is_record = tokens
                .first()
                .and_then(|t| t.chars().next())
                .is_some_and(|c| c.is_ascii_digit());
            if !is_record {
                continue;
            }

            let invalid = || InstanceError::InvalidRecord {
                line: number,
                content: line.clone(),
            };
            let [id, x, y] = tokens[..] else {
                return Err(invalid());
            };
            let id: usize = id.parse().map_err(|_| invalid())?;
            let x: f64 = x.parse().map_err(|_| invalid())?;
            let y: f64 = y.parse().map_err(|_| invalid())?;

            let expected = points.len() + 1;
            if id != expected {
                return Err(InstanceError::UnexpectedId {
                    line: number,
                    expected,
                    found: id,
                });
            }
            points.push(Point::new(id, x, y));
        }

        if points.is_empty() {
            return Err(InstanceError::NoPoints);
        }
        Ok(Self { name, points })
    }

    /// Instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points in id order; vertex `i` is the point with id `i + 1`.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the instance has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Rounded Euclidean distance matrix over the points.
    pub fn distance_matrix(&self) -> DistanceMatrix {
        DistanceMatrix::from_points(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "NAME: kroA5.tsp
TYPE: TSP
COMMENT: five points
DIMENSION: 5
EDGE_WEIGHT_TYPE: EUC_2D
NODE_COORD_SECTION
1 7 18
2 3 10
3 0 0
4 0 20
5 17 0
EOF
";

    #[test]
    fn test_parse_sample() {
        let instance = Instance::parse(SAMPLE).expect("valid");
        assert_eq!(instance.name(), "kroA5");
        assert_eq!(instance.len(), 5);
        assert_eq!(instance.points()[4], Point::new(5, 17.0, 0.0));
    }

    #[test]
    fn test_distance_matrix() {
        let dm = Instance::parse(SAMPLE).expect("valid").distance_matrix();
        assert_eq!(dm.size(), 5);
        // (7,18) to (3,10): sqrt(80) = 8.94
        assert_eq!(dm.get(0, 1), Some(9.0));
        assert_eq!(dm.get(3, 4), Some(26.0));
    }

    #[test]
    fn test_missing_name() {
        assert!(matches!(
            Instance::parse("NAME:\n1 0 0\n"),
            Err(InstanceError::MissingName)
        ));
        assert!(matches!(Instance::parse(""), Err(InstanceError::MissingName)));
    }

    #[test]
    fn test_invalid_record() {
        let err = Instance::parse("NAME: x.tsp\n1 0 0\n2 4\n").unwrap_err();
        assert!(matches!(err, InstanceError::InvalidRecord { line: 3, .. }));
        let err = Instance::parse("NAME: x.tsp\n1 0 zero\n").unwrap_err();
        assert!(matches!(err, InstanceError::InvalidRecord { line: 2, .. }));
    }

    #[test]
    fn test_out_of_order_id() {
        let err = Instance::parse("NAME: x.tsp\n1 0 0\n3 1 1\n").unwrap_err();
        assert!(matches!(
            err,
            InstanceError::UnexpectedId {
                line: 3,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_no_points() {
        assert!(matches!(
            Instance::parse("NAME: x.tsp\nEOF\n"),
            Err(InstanceError::NoPoints)
        ));
    }
}
