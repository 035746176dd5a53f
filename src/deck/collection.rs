//! A full deck: one card per line of the plane.
//!
//! Card `i + 1` is printed from line `i`, so the deck inherits the plane's
//! deterministic ordering. Listing the deck prints one `Card i: [...]` row
//! per card.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};
use super::symbol::SymbolId;
use crate::core::{plane_size, DeckConfig, DeckError, Order};
use crate::plane::{build_plane, Plane};

/// A deck of cards built from a projective plane.
///
/// ## Example
///
/// ```
/// use spot_deck::core::DeckConfig;
/// use spot_deck::deck::Deck;
///
/// let deck = Deck::generate(&DeckConfig::default()).unwrap();
/// assert_eq!(deck.len(), 57);
///
/// let first = &deck.cards()[0];
/// let second = &deck.cards()[1];
/// assert!(first.matching_symbol(second).is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    order: u32,
    cards: Vec<Card>,
}

impl Deck {
    /// Number every line of a plane, in plane order.
    #[must_use]
    pub fn from_plane(plane: &Plane) -> Self {
        let n = plane.order();
        let cards = plane
            .iter()
            .zip(1u32..)
            .map(|(line, id)| Card::from_line(CardId::new(id), line, n))
            .collect();
        Self { order: n, cards }
    }

    /// Generate a deck as described by `config`.
    pub fn generate(config: &DeckConfig) -> Result<Self, DeckError> {
        let plane = if config.validate_order {
            Plane::from_order(Order::new(config.order)?)
        } else {
            if Order::new(config.order).is_err() {
                warn!(
                    "building unchecked order {}: cards may not share exactly one symbol",
                    config.order
                );
            }
            build_plane(config.order)
        };

        if config.verify {
            plane.verify()?;
        }

        let mut deck = Self::from_plane(&plane);
        if let Some(seed) = config.shuffle_seed {
            deck = deck.shuffled(seed);
        }

        for card in &deck.cards {
            debug!("{}", card);
        }
        info!(
            "generated deck of order {}: {} cards, {} symbols per card",
            deck.order,
            config.card_count(),
            config.symbols_per_card()
        );

        Ok(deck)
    }

    /// Get the order of the underlying plane.
    #[must_use]
    pub const fn order(&self) -> u32 {
        self.order
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate over cards in deck order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Look up a card by number.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Number of distinct symbols the deck uses: `n² + n + 1`.
    #[must_use]
    pub const fn symbol_count(&self) -> usize {
        plane_size(self.order)
    }

    /// Cards showing a given symbol.
    pub fn cards_with(&self, symbol: SymbolId) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().filter(move |c| c.contains(symbol))
    }

    /// Encode the deck with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, DeckError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a deck produced by [`Deck::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DeckError> {
        Ok(bincode::deserialize(bytes)?)
    }

    pub(crate) fn from_parts(order: u32, cards: Vec<Card>) -> Self {
        Self { order, cards }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for card in &self.cards {
            writeln!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlaneError;

    #[test]
    fn test_from_plane_order_two() {
        let deck = Deck::from_plane(&build_plane(2));
        let listing = deck.to_string();
        let expected = "\
Card 1: [0, 2, 4]
Card 2: [1, 3, 4]
Card 3: [0, 3, 5]
Card 4: [1, 2, 5]
Card 5: [0, 1, 6]
Card 6: [2, 3, 6]
Card 7: [4, 5, 6]
";
        assert_eq!(listing, expected);
    }

    #[test]
    fn test_generate_default() {
        let deck = Deck::generate(&DeckConfig::default()).unwrap();
        assert_eq!(deck.order(), 7);
        assert_eq!(deck.len(), 57);
        assert_eq!(deck.symbol_count(), 57);
        assert!(deck.iter().all(|c| c.len() == 8));
    }

    #[test]
    fn test_generate_rejects_invalid_order() {
        let err = Deck::generate(&DeckConfig::new(6)).unwrap_err();
        assert!(matches!(err, DeckError::Plane(PlaneError::InvalidOrder { order: 6 })));
    }

    #[test]
    fn test_generate_unchecked_builds_anyway() {
        let deck = Deck::generate(&DeckConfig::new(4).unchecked()).unwrap();
        assert_eq!(deck.len(), 21);
    }

    #[test]
    fn test_generate_unchecked_prime_matches_checked() {
        let unchecked = Deck::generate(&DeckConfig::new(5).unchecked()).unwrap();
        let checked = Deck::generate(&DeckConfig::new(5)).unwrap();
        assert_eq!(unchecked, checked);
    }

    #[test]
    fn test_generate_unchecked_verified_fails() {
        let err = Deck::generate(&DeckConfig::new(4).unchecked().verified()).unwrap_err();
        assert!(matches!(err, DeckError::Plane(PlaneError::Violation(_))));
    }

    #[test]
    fn test_card_lookup() {
        let deck = Deck::from_plane(&build_plane(3));
        assert_eq!(deck.card(CardId::new(1)).unwrap().id, CardId::new(1));
        assert_eq!(deck.card(CardId::new(13)).unwrap().len(), 4);
        assert!(deck.card(CardId::new(14)).is_none());
        assert!(deck.card(CardId::new(0)).is_none());
    }

    #[test]
    fn test_cards_with_symbol() {
        let deck = Deck::from_plane(&build_plane(3));
        for symbol in 0..13 {
            assert_eq!(deck.cards_with(SymbolId(symbol)).count(), 4);
        }
        assert_eq!(deck.cards_with(SymbolId(13)).count(), 0);
    }

    #[test]
    fn test_bincode_round_trip() {
        let deck = Deck::from_plane(&build_plane(5));
        let bytes = deck.to_bytes().unwrap();
        assert_eq!(Deck::from_bytes(&bytes).unwrap(), deck);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        let err = Deck::from_bytes(&[0xff, 0xff]).unwrap_err();
        assert!(matches!(err, DeckError::Codec(_)));
    }
}
