//! Error types.
//!
//! Plane construction itself never fails; errors come from the checked
//! entry points, the verifier, and the deck codec.

use super::point::Point;

/// Errors from checked plane construction and verification.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlaneError {
    #[error("invalid order {order}: the mod-n construction needs a prime order")]
    InvalidOrder { order: u32 },

    #[error("plane violates projective axioms: {0}")]
    Violation(Violation),
}

/// A projective-plane axiom a built plane fails to satisfy.
///
/// Line indices refer to positions in the plane's line sequence.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("expected {expected} lines, found {actual}")]
    LineCount { expected: usize, actual: usize },

    #[error("line {line} has {actual} points, expected {expected}")]
    LineSize {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("line {line} repeats point {point}")]
    DuplicatePoint { line: usize, point: Point },

    #[error("expected {expected} distinct points, found {actual}")]
    PointCount { expected: usize, actual: usize },

    #[error("point {point} lies on {actual} lines, expected {expected}")]
    PointDegree {
        point: Point,
        expected: usize,
        actual: usize,
    },

    #[error("lines {first} and {second} share {shared} points")]
    Intersection {
        first: usize,
        second: usize,
        shared: usize,
    },
}

impl From<Violation> for PlaneError {
    fn from(violation: Violation) -> Self {
        Self::Violation(violation)
    }
}

/// Errors from deck generation and (de)serialization.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error(transparent)]
    Plane(#[from] PlaneError),

    #[error("deck codec error: {0}")]
    Codec(#[from] bincode::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_order_message() {
        let err = PlaneError::InvalidOrder { order: 6 };
        assert_eq!(
            err.to_string(),
            "invalid order 6: the mod-n construction needs a prime order"
        );
    }

    #[test]
    fn test_violation_converts() {
        let err: PlaneError = Violation::Intersection {
            first: 0,
            second: 3,
            shared: 2,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "plane violates projective axioms: lines 0 and 3 share 2 points"
        );
    }

    #[test]
    fn test_deck_error_wraps_plane_error() {
        let err: DeckError = PlaneError::InvalidOrder { order: 4 }.into();
        assert!(matches!(err, DeckError::Plane(PlaneError::InvalidOrder { order: 4 })));
        assert_eq!(
            err.to_string(),
            "invalid order 4: the mod-n construction needs a prime order"
        );
    }
}
