//! Points of a finite projective plane.
//!
//! A plane of order `n` is the affine grid `{0..n} x {0..n}` completed with
//! points at infinity: one per slope `m` (where all lines of slope `m` meet)
//! plus the vertical point at infinity shared by all vertical lines.
//!
//! ## Usage
//!
//! ```
//! use spot_deck::core::Point;
//!
//! let p = Point::finite(2, 3);
//! assert!(p.is_finite());
//!
//! let slope = Point::slope(1);
//! assert_eq!(slope.slope_of(), Some(1));
//!
//! assert!(Point::VERTICAL.is_infinite());
//! assert_eq!(Point::VERTICAL.slope_of(), None);
//! ```

use serde::{Deserialize, Serialize};

/// A point of the plane.
///
/// Points carry no identity beyond their coordinates: two points with
/// equal coordinates are the same point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Point {
    /// A point of the affine grid.
    Finite {
        /// Column, in `0..n`.
        x: u32,
        /// Row, in `0..n`.
        y: u32,
    },
    /// A point at infinity.
    ///
    /// `Some(m)` is the point where all lines of slope `m` meet.
    /// `None` is the point where all vertical lines meet.
    Infinity(Option<u32>),
}

impl Point {
    /// The point at infinity shared by all vertical lines.
    pub const VERTICAL: Self = Self::Infinity(None);

    /// Create a finite point.
    #[must_use]
    pub const fn finite(x: u32, y: u32) -> Self {
        Self::Finite { x, y }
    }

    /// Create the point at infinity for slope `m`.
    #[must_use]
    pub const fn slope(m: u32) -> Self {
        Self::Infinity(Some(m))
    }

    /// Check if this is an affine grid point.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self, Self::Finite { .. })
    }

    /// Check if this point lies on the line at infinity.
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::Infinity(_))
    }

    /// Get the slope this point at infinity stands for.
    ///
    /// Returns `None` for finite points and for the vertical point.
    #[must_use]
    pub const fn slope_of(self) -> Option<u32> {
        match self {
            Self::Infinity(slope) => slope,
            Self::Finite { .. } => None,
        }
    }

    /// Coordinates in the sentinel encoding, where the coordinate `n`
    /// marks infinity: slope points are `(n, m)` and the vertical point
    /// is `(n, n)`.
    #[must_use]
    pub const fn coordinates(self, order: u32) -> (u32, u32) {
        match self {
            Self::Finite { x, y } => (x, y),
            Self::Infinity(Some(m)) => (order, m),
            Self::Infinity(None) => (order, order),
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Finite { x, y } => write!(f, "({}, {})", x, y),
            Self::Infinity(Some(m)) => write!(f, "(inf, {})", m),
            Self::Infinity(None) => write!(f, "(inf, inf)"),
        }
    }
}
