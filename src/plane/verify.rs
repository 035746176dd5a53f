//! Projective-plane axiom checks.
//!
//! `build_plane` never validates its order, so a plane built from a
//! non-prime order silently breaks the axioms. `Plane::verify` makes that
//! observable. Each check covers the whole plane before the next starts, and
//! the first failure is reported.

use rustc_hash::{FxHashMap, FxHashSet};

use super::builder::Plane;
use crate::core::{plane_size, PlaneError, Point, Violation};

impl Plane {
    /// Check every projective-plane axiom.
    ///
    /// Returns the first violated axiom as `PlaneError::Violation`.
    pub fn verify(&self) -> Result<(), PlaneError> {
        let n = self.order() as usize;
        let expected_lines = plane_size(self.order());
        let line_size = n + 1;

        if self.len() != expected_lines {
            return Err(Violation::LineCount {
                expected: expected_lines,
                actual: self.len(),
            }
            .into());
        }

        if let Some((index, line)) = self.iter().enumerate().find(|(_, l)| l.len() != line_size) {
            return Err(Violation::LineSize {
                line: index,
                expected: line_size,
                actual: line.len(),
            }
            .into());
        }

        let mut line_sets: Vec<FxHashSet<Point>> = Vec::with_capacity(self.len());
        let mut degree: FxHashMap<Point, usize> = FxHashMap::default();
        let mut first_seen: Vec<Point> = Vec::new();

        for (index, line) in self.iter().enumerate() {
            let mut set = FxHashSet::default();
            for point in line.iter() {
                if !set.insert(point) {
                    return Err(Violation::DuplicatePoint { line: index, point }.into());
                }
                let count = degree.entry(point).or_insert(0);
                if *count == 0 {
                    first_seen.push(point);
                }
                *count += 1;
            }
            line_sets.push(set);
        }

        if degree.len() != expected_lines {
            return Err(Violation::PointCount {
                expected: expected_lines,
                actual: degree.len(),
            }
            .into());
        }

        // Walk points in first-appearance order so the reported point is
        // deterministic.
        for point in first_seen {
            let actual = degree[&point];
            if actual != line_size {
                return Err(Violation::PointDegree {
                    point,
                    expected: line_size,
                    actual,
                }
                .into());
            }
        }

        for (first, a) in line_sets.iter().enumerate() {
            for (offset, b) in line_sets[first + 1..].iter().enumerate() {
                let shared = a.intersection(b).count();
                if shared != 1 {
                    return Err(Violation::Intersection {
                        first,
                        second: first + 1 + offset,
                        shared,
                    }
                    .into());
                }
            }
        }

        Ok(())
    }

    /// Check if this plane satisfies every projective-plane axiom.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.verify().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plane::build_plane;

    #[test]
    fn test_prime_orders_verify() {
        for n in [2, 3, 5, 7] {
            assert_eq!(build_plane(n).verify(), Ok(()), "order {}", n);
        }
    }

    #[test]
    fn test_order_one_verifies() {
        // The triangle: 3 points, 3 lines, each pair of lines meets once.
        assert!(build_plane(1).is_valid());
    }

    #[test]
    fn test_order_zero_is_trivially_valid() {
        // One line holding one point: every count matches n + 1 = 1.
        assert!(build_plane(0).is_valid());
    }

    #[test]
    fn test_truncated_plane_fails_line_count() {
        let mut lines = build_plane(3).into_lines();
        lines.pop();
        let plane = Plane::from_parts(3, lines);
        assert_eq!(
            plane.verify(),
            Err(PlaneError::Violation(Violation::LineCount {
                expected: 13,
                actual: 12,
            }))
        );
    }

    #[test]
    fn test_short_line_fails_line_size() {
        let mut lines = build_plane(2).into_lines();
        lines[3].points.pop();
        let err = Plane::from_parts(2, lines).verify().unwrap_err();
        assert_eq!(
            err,
            PlaneError::Violation(Violation::LineSize {
                line: 3,
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_line_size_reported_before_repeated_point() {
        let mut lines = build_plane(2).into_lines();
        lines[0].points[1] = Point::finite(0, 0);
        lines[3].points.pop();
        let err = Plane::from_parts(2, lines).verify().unwrap_err();
        assert_eq!(
            err,
            PlaneError::Violation(Violation::LineSize {
                line: 3,
                expected: 3,
                actual: 2,
            })
        );
    }

    #[test]
    fn test_repeated_point_reported_before_point_count() {
        // Line 0 repeats the origin and line 1 gains a stray point.
        let mut lines = build_plane(2).into_lines();
        lines[0].points[1] = Point::finite(0, 0);
        lines[1].points[0] = Point::finite(5, 5);
        let err = Plane::from_parts(2, lines).verify().unwrap_err();
        assert_eq!(
            err,
            PlaneError::Violation(Violation::DuplicatePoint {
                line: 0,
                point: Point::finite(0, 0),
            })
        );
    }

    #[test]
    fn test_repeated_point_fails() {
        let mut lines = build_plane(1).into_lines();
        lines[0].points[1] = Point::finite(0, 0);
        let err = Plane::from_parts(1, lines).verify().unwrap_err();
        assert_eq!(
            err,
            PlaneError::Violation(Violation::DuplicatePoint {
                line: 0,
                point: Point::finite(0, 0),
            })
        );
    }

    #[test]
    fn test_extra_point_fails_point_count() {
        // Replace the slope point on the first line with a point no other
        // line carries.
        let mut lines = build_plane(2).into_lines();
        lines[0].points[2] = Point::finite(5, 5);
        let err = Plane::from_parts(2, lines).verify().unwrap_err();
        assert_eq!(
            err,
            PlaneError::Violation(Violation::PointCount {
                expected: 7,
                actual: 8,
            })
        );
    }

    #[test]
    fn test_swapped_point_fails_degree() {
        // The origin moves off line 0 onto a point already present, so the
        // origin loses a line and (1, 1) gains one.
        let mut lines = build_plane(2).into_lines();
        lines[0].points[0] = Point::finite(1, 1);
        let err = Plane::from_parts(2, lines).verify().unwrap_err();
        assert_eq!(
            err,
            PlaneError::Violation(Violation::PointDegree {
                point: Point::finite(1, 1),
                expected: 3,
                actual: 4,
            })
        );
    }

    #[test]
    fn test_order_four_fails() {
        // Z/4Z is not a field: y = 2x and y = 0 meet at x = 0 and x = 2.
        let plane = build_plane(4);
        let err = plane.verify().unwrap_err();
        assert!(matches!(err, PlaneError::Violation(Violation::Intersection { .. })));
        assert!(!plane.is_valid());
    }

    #[test]
    fn test_order_six_fails() {
        assert!(!build_plane(6).is_valid());
    }
}
