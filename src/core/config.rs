//! Deck generation configuration.
//!
//! Callers describe a generation request with `DeckConfig`:
//! - `order`: plane order `n` (7 gives the classic 57-card deck)
//! - `validate_order`: reject orders the construction cannot handle
//! - `verify`: check the projective axioms on the built plane
//! - `shuffle_seed`: deterministically shuffle the finished deck

use serde::{Deserialize, Serialize};

use super::order::Order;

/// Configuration for one deck generation request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Plane order `n`. The deck has `n² + n + 1` cards of `n + 1` symbols.
    pub order: u32,

    /// Fail with `InvalidOrder` unless `order` is prime.
    ///
    /// When disabled, any order is built mechanically; non-prime orders
    /// then yield decks where some cards share zero or several symbols.
    pub validate_order: bool,

    /// Run the plane verifier before building cards.
    pub verify: bool,

    /// Shuffle card order and symbol layout with this seed. `None` keeps
    /// construction order.
    pub shuffle_seed: Option<u64>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            order: Order::CLASSIC.get(),
            validate_order: true,
            verify: false,
            shuffle_seed: None,
        }
    }
}

impl DeckConfig {
    /// Create a configuration for the given order with default settings.
    pub fn new(order: u32) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// Build whatever the construction yields, without the prime check.
    #[must_use]
    pub fn unchecked(mut self) -> Self {
        self.validate_order = false;
        self
    }

    /// Verify the projective axioms after construction.
    #[must_use]
    pub fn verified(mut self) -> Self {
        self.verify = true;
        self
    }

    /// Shuffle the generated deck with a fixed seed.
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Number of cards a deck built from this configuration holds.
    #[must_use]
    pub fn card_count(&self) -> usize {
        super::order::plane_size(self.order)
    }

    /// Number of symbols printed on each card.
    #[must_use]
    pub fn symbols_per_card(&self) -> usize {
        self.order as usize + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_classic_deck() {
        let config = DeckConfig::default();
        assert_eq!(config.order, 7);
        assert!(config.validate_order);
        assert!(!config.verify);
        assert_eq!(config.shuffle_seed, None);
        assert_eq!(config.card_count(), 57);
        assert_eq!(config.symbols_per_card(), 8);
    }

    #[test]
    fn test_builder() {
        let config = DeckConfig::new(4).unchecked().verified().with_shuffle_seed(42);

        assert_eq!(config.order, 4);
        assert!(!config.validate_order);
        assert!(config.verify);
        assert_eq!(config.shuffle_seed, Some(42));
        assert_eq!(config.card_count(), 21);
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let config: DeckConfig = serde_json::from_str(r#"{"order": 3}"#).unwrap();
        assert_eq!(config, DeckConfig::new(3));
    }

    #[test]
    fn test_serialization() {
        let config = DeckConfig::new(5).with_shuffle_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: DeckConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
