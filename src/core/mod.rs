//! Core value types: points, lines, orders, configuration, errors.
//!
//! Everything here is a plain value. Construction lives in `plane`,
//! card numbering in `deck`.

pub mod point;
pub mod line;
pub mod order;
pub mod config;
pub mod error;

pub use point::Point;
pub use line::Line;
pub use order::{is_prime, plane_size, Order};
pub use config::DeckConfig;
pub use error::{DeckError, PlaneError, Violation};
