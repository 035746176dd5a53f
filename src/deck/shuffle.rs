//! Deterministic deck shuffling.
//!
//! A printed deck should not reveal the construction order (the last card
//! would always carry every point at infinity). Shuffling permutes both the
//! card order and the symbol layout on each card with a seeded ChaCha8
//! stream, so the same seed always yields the same deck.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::collection::Deck;

impl Deck {
    /// Return a shuffled copy of this deck.
    ///
    /// Card ids and each card's symbol set are unchanged; only their order
    /// is permuted.
    ///
    /// ```
    /// use spot_deck::deck::Deck;
    /// use spot_deck::plane::build_plane;
    ///
    /// let deck = Deck::from_plane(&build_plane(3));
    /// assert_eq!(deck.shuffled(7), deck.shuffled(7));
    /// assert_ne!(deck.shuffled(7), deck);
    /// ```
    #[must_use]
    pub fn shuffled(&self, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut cards = self.cards().to_vec();
        cards.shuffle(&mut rng);
        for card in &mut cards {
            card.symbols.shuffle(&mut rng);
        }

        Self::from_parts(self.order(), cards)
    }
}
