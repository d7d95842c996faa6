//! Native token amounts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single-denom token amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: u128,
}

impl Coin {
    pub fn new(amount: u128, denom: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Shorthand for a single-coin vector, e.g. `coins(100, "ustars")`.
pub fn coins(amount: u128, denom: impl Into<String>) -> Vec<Coin> {
    vec![Coin::new(amount, denom)]
}
