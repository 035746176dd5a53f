//! Lines of a finite projective plane.
//!
//! A line is an ordered sequence of points. The order carries no geometric
//! meaning but is fixed by construction, so card numbering derived from it
//! is reproducible.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::point::Point;

/// An ordered line of `n + 1` points.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// Points on this line, in construction order.
    /// SmallVec keeps lines of the default order 7 (8 points) inline.
    pub points: SmallVec<[Point; 8]>,
}

impl Line {
    /// Create an empty line with room for `capacity` points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: SmallVec::with_capacity(capacity),
        }
    }

    /// Create a line from the given points.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        Self {
            points: SmallVec::from_slice(points),
        }
    }

    /// Append a point to this line.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the line has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check if the line passes through a point.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }

    /// Iterate over the points in construction order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Points this line shares with another, in this line's order.
    ///
    /// Two distinct lines of a valid plane share exactly one point.
    #[must_use]
    pub fn intersection(&self, other: &Line) -> SmallVec<[Point; 1]> {
        self.iter().filter(|&p| other.contains(p)).collect()
    }
}

impl FromIterator<Point> for Line {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", point)?;
        }
        write!(f, "]")
    }
}
