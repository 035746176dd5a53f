//! Plane construction and verification.
//!
//! ## Key Items
//!
//! - `build_plane`: every line of PG(2, n), order unchecked
//! - `try_build_plane`: same, rejecting non-prime orders
//! - `Plane`: the constructed lines plus incidence queries
//! - `Plane::verify`: projective axiom checks

pub mod builder;
pub mod verify;

pub use builder::{build_plane, line_at_infinity, non_vertical_line, try_build_plane, vertical_line, Plane};
