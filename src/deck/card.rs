//! Cards: one line of the plane, printed as symbol ids.
//!
//! Any two cards of a valid deck share exactly one symbol, which is what
//! players race to spot.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::symbol::SymbolId;
use crate::core::Line;

/// Card number, 1-based in deck construction order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card {}", self.0)
    }
}

/// A card and the symbols printed on it.
///
/// ## Example
///
/// ```
/// use spot_deck::deck::{Card, CardId, SymbolId};
///
/// let a = Card::new(CardId::new(1), &[SymbolId(0), SymbolId(2), SymbolId(4)]);
/// let b = Card::new(CardId::new(2), &[SymbolId(1), SymbolId(3), SymbolId(4)]);
///
/// assert_eq!(a.matching_symbol(&b), Some(SymbolId(4)));
/// assert_eq!(a.to_string(), "Card 1: [0, 2, 4]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Card number.
    pub id: CardId,

    /// Symbols in print order.
    pub symbols: SmallVec<[SymbolId; 8]>,
}

impl Card {
    /// Create a card from explicit symbols.
    #[must_use]
    pub fn new(id: CardId, symbols: &[SymbolId]) -> Self {
        Self {
            id,
            symbols: SmallVec::from_slice(symbols),
        }
    }

    /// Number every point of a line of a plane of order `n`.
    #[must_use]
    pub fn from_line(id: CardId, line: &Line, n: u32) -> Self {
        Self {
            id,
            symbols: line.iter().map(|p| SymbolId::from_point(p, n)).collect(),
        }
    }

    /// Get the number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the card has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check if a symbol is printed on this card.
    #[must_use]
    pub fn contains(&self, symbol: SymbolId) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Iterate over symbols in print order.
    pub fn iter(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.symbols.iter().copied()
    }

    /// The first symbol, in this card's order, also printed on `other`.
    #[must_use]
    pub fn matching_symbol(&self, other: &Card) -> Option<SymbolId> {
        self.iter().find(|&s| other.contains(s))
    }

    /// Every symbol shared with `other`, in this card's order.
    #[must_use]
    pub fn shared_symbols(&self, other: &Card) -> SmallVec<[SymbolId; 1]> {
        self.iter().filter(|&s| other.contains(s)).collect()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: [", self.id)?;
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", symbol)?;
        }
        write!(f, "]")
    }
}
