//! Plane construction: the affine plane over `Z/nZ` plus the line at
//! infinity.
//!
//! ## Line Layout
//!
//! Lines are produced in a fixed order:
//! - `0..n²`: non-vertical lines `y = m·x + b`, `m` outer, `b` inner
//! - `n²..n²+n`: vertical lines `x = c`, ascending `c`
//! - `n²+n`: the line at infinity
//!
//! Within a line, affine points come first in ascending `x` (or `y` for
//! verticals) and the point at infinity is appended last.

use serde::{Deserialize, Serialize};

use crate::core::{plane_size, Line, Order, PlaneError, Point};

/// A projective plane of order `n`: its `n² + n + 1` lines.
///
/// ## Example
///
/// ```
/// use spot_deck::plane::build_plane;
///
/// let plane = build_plane(2);
/// assert_eq!(plane.len(), 7);
/// assert!(plane.iter().all(|line| line.len() == 3));
/// assert!(plane.verify().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plane {
    order: u32,
    lines: Vec<Line>,
}

impl Plane {
    /// Build the plane for a validated order.
    #[must_use]
    pub fn from_order(order: Order) -> Self {
        build_plane(order.get())
    }

    /// Wrap an arbitrary set of lines claimed to form a plane of `order`.
    ///
    /// Nothing is checked; call [`Plane::verify`] before relying on the
    /// axioms.
    #[must_use]
    pub fn from_parts(order: u32, lines: Vec<Line>) -> Self {
        Self { order, lines }
    }

    /// Get the order `n`.
    #[must_use]
    pub const fn order(&self) -> u32 {
        self.order
    }

    /// Get the number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the plane has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines in construction order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Get a line by index.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Iterate over lines in construction order.
    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Take ownership of the lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<Line> {
        self.lines
    }

    /// All distinct points, in order of first appearance.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        let mut seen = rustc_hash::FxHashSet::default();
        self.iter()
            .flat_map(|line| line.iter())
            .filter(|&p| seen.insert(p))
            .collect()
    }

    /// Indices of the lines passing through a point.
    pub fn lines_through(&self, point: Point) -> impl Iterator<Item = usize> + '_ {
        self.iter()
            .enumerate()
            .filter(move |(_, line)| line.contains(point))
            .map(|(i, _)| i)
    }

    /// Points shared by the lines at indices `first` and `second`.
    ///
    /// Returns `None` if either index is out of range.
    #[must_use]
    pub fn intersection(&self, first: usize, second: usize) -> Option<Vec<Point>> {
        let a = self.line(first)?;
        let b = self.line(second)?;
        Some(a.intersection(b).into_vec())
    }
}

impl<'a> IntoIterator for &'a Plane {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Build every line of the projective plane of order `n`.
///
/// The order is not validated. For non-prime `n` the lines are still
/// produced, but two of them may meet in zero or several points; use
/// [`try_build_plane`] to reject such orders. `n = 0` yields a single line
/// holding only the vertical point at infinity.
#[must_use]
pub fn build_plane(n: u32) -> Plane {
    let mut lines = Vec::with_capacity(plane_size(n));

    for m in 0..n {
        for b in 0..n {
            lines.push(non_vertical_line(m, b, n));
        }
    }
    lines.extend((0..n).map(|x| vertical_line(x, n)));
    lines.push(line_at_infinity(n));

    Plane { order: n, lines }
}

/// Build the plane of order `n`, rejecting orders that are not prime.
pub fn try_build_plane(n: u32) -> Result<Plane, PlaneError> {
    Order::new(n).map(Plane::from_order)
}

/// The line `y = m·x + b (mod n)` completed by its slope point.
#[must_use]
pub fn non_vertical_line(m: u32, b: u32, n: u32) -> Line {
    let (m64, b64, n64) = (u64::from(m), u64::from(b), u64::from(n));
    let mut line = Line::with_capacity(n as usize + 1);
    for x in 0..n {
        // Result is < n, so it fits back into u32.
        let y = ((m64 * u64::from(x) + b64) % n64) as u32;
        line.push(Point::finite(x, y));
    }
    line.push(Point::slope(m));
    line
}

/// The vertical line `x = c` completed by the vertical point at infinity.
#[must_use]
pub fn vertical_line(c: u32, n: u32) -> Line {
    (0..n)
        .map(|y| Point::finite(c, y))
        .chain(std::iter::once(Point::VERTICAL))
        .collect()
}

/// Every slope point followed by the vertical point.
#[must_use]
pub fn line_at_infinity(n: u32) -> Line {
    (0..n)
        .map(Point::slope)
        .chain(std::iter::once(Point::VERTICAL))
        .collect()
}
