//! Card symbol numbering.
//!
//! Each point of the plane is printed on cards as an integer symbol id.
//! Points are numbered through their sentinel coordinates `(u, v)` as
//! `u · n + v`, where infinity takes the coordinate `n`:
//!
//! - `Finite { x, y }` → `x·n + y`, covering `0..n²`
//! - slope point `m` → `n² + m`
//! - vertical point → `n² + n`
//!
//! so a plane of order `n` uses exactly the ids `0..n² + n + 1`.
//!
//! ```
//! use spot_deck::core::Point;
//! use spot_deck::deck::SymbolId;
//!
//! assert_eq!(SymbolId::from_point(Point::finite(1, 2), 7), SymbolId(9));
//! assert_eq!(SymbolId::from_point(Point::slope(3), 7), SymbolId(52));
//! assert_eq!(SymbolId::from_point(Point::VERTICAL, 7), SymbolId(56));
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Identifier of a symbol printed on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u64);

impl SymbolId {
    /// Number a point of a plane of order `n`.
    #[must_use]
    pub fn from_point(point: Point, n: u32) -> Self {
        let (u, v) = point.coordinates(n);
        Self(u64::from(u) * u64::from(n) + u64::from(v))
    }

    /// Recover the point a symbol id stands for.
    ///
    /// Returns `None` if the id is outside `0..n² + n + 1`.
    #[must_use]
    pub fn to_point(self, n: u32) -> Option<Point> {
        let n64 = u64::from(n);
        let grid = n64 * n64;
        if self.0 < grid {
            // Both parts are < n.
            Some(Point::finite((self.0 / n64) as u32, (self.0 % n64) as u32))
        } else if self.0 < grid + n64 {
            Some(Point::slope((self.0 - grid) as u32))
        } else if self.0 == grid + n64 {
            Some(Point::VERTICAL)
        } else {
            None
        }
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
