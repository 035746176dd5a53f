//! Card layer: symbol numbering, cards, and decks.
//!
//! ## Key Types
//!
//! - `SymbolId`: integer printed for a point (`u·n + v` numbering)
//! - `Card`: the symbols of one line, with a 1-based `CardId`
//! - `Deck`: every card of a plane, generation from `DeckConfig`,
//!   seeded shuffling, and a bincode codec
//!
//! Mapping symbols to images is left to the caller.

pub mod symbol;
pub mod card;
pub mod collection;
pub mod shuffle;

pub use symbol::SymbolId;
pub use card::{Card, CardId};
pub use collection::Deck;
