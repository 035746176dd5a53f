//! Validated plane orders.
//!
//! The construction computes `(m * x + b) mod n`, which only behaves like a
//! field when `n` is prime. Prime powers such as 4 or 9 do admit projective
//! planes, but not through integer arithmetic mod `n`, so `Order` rejects
//! them along with every other non-prime.
//!
//! ```
//! use spot_deck::core::Order;
//!
//! assert_eq!(Order::new(7).unwrap().get(), 7);
//! assert!(Order::new(8).is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::error::PlaneError;

/// A plane order the construction is known to handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Order(u32);

impl Order {
    /// Order of the classic 57-card deck.
    pub const CLASSIC: Self = Self(7);

    /// Validate `n` as a plane order.
    pub fn new(n: u32) -> Result<Self, PlaneError> {
        if is_prime(n) {
            Ok(Self(n))
        } else {
            Err(PlaneError::InvalidOrder { order: n })
        }
    }

    /// Get the raw order.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

}

impl Default for Order {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl TryFrom<u32> for Order {
    type Error = PlaneError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<Order> for u32 {
    fn from(order: Order) -> Self {
        order.0
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Order({})", self.0)
    }
}

/// Number of points and lines of a plane of order `n`: `n² + n + 1`.
#[must_use]
pub const fn plane_size(n: u32) -> usize {
    let n = n as usize;
    n * n + n + 1
}

/// Trial-division primality test.
#[must_use]
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let n = u64::from(n);
    let mut d = 3u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
