//! # spot-deck
//!
//! Spot-It style deck generation from finite projective planes.
//!
//! A projective plane of order `n`, PG(2, n), has `n² + n + 1` points and as
//! many lines; every line holds `n + 1` points and any two lines meet in
//! exactly one point. Reading each line as a card and each point as a
//! symbol gives a deck where any two cards share exactly one symbol.
//! Order 7 is the classic 57-card deck.
//!
//! ## Design Principles
//!
//! 1. **Pure Construction**: `build_plane` is a total function of `n`
//!    with no I/O and no validation. Checking is opt-in via
//!    `try_build_plane`, `Order`, and `Plane::verify`.
//!
//! 2. **Deterministic Layout**: line order, point order within lines,
//!    card numbering, and seeded shuffles are all reproducible.
//!
//! 3. **Tagged Infinity**: points at infinity are an enum variant, never
//!    an out-of-range coordinate.
//!
//! ## Modules
//!
//! - `core`: points, lines, orders, configuration, errors
//! - `plane`: construction and axiom verification
//! - `deck`: symbol numbering, cards, decks, shuffling
//!
//! ## Example
//!
//! ```
//! use spot_deck::{Deck, DeckConfig};
//!
//! let deck = Deck::generate(&DeckConfig::new(3)).unwrap();
//! assert_eq!(deck.len(), 13);
//!
//! let cards = deck.cards();
//! for (i, a) in cards.iter().enumerate() {
//!     for b in &cards[i + 1..] {
//!         assert_eq!(a.shared_symbols(b).len(), 1);
//!     }
//! }
//! ```

pub mod core;
pub mod plane;
pub mod deck;

// Re-export commonly used types
pub use crate::core::{
    Point, Line, Order, DeckConfig,
    PlaneError, Violation, DeckError,
    is_prime, plane_size,
};

pub use crate::plane::{build_plane, try_build_plane, Plane};

pub use crate::deck::{SymbolId, Card, CardId, Deck};
