//! Planar point type.

use serde::{Deserialize, Serialize};

/// A location in the plane, identified by its instance id.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
///
/// let a = Point::new(1, 0.0, 0.0);
/// let b = Point::new(2, 3.0, 4.0);
/// assert_eq!(a.distance_to(&b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: usize,
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Instance id of this point (1-based in instance files).
    pub fn id(&self) -> usize {
        self.id
    }

    /// X coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `other`, rounded to the nearest integer.
    ///
    /// Halfway values round to even, so `2.5` becomes `2.0`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt().round_ties_even()
    }
}
