//! Instantiate payload of the marketplace contract.
//!
//! Field names and field order are the contract's schema; the struct
//! serializes to exactly the JSON the contract expects, numbers as JSON
//! numbers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seconds in a day.
pub const DAY_SECS: u64 = 24 * 60 * 60;

/// Upper bound for any basis-point field (100%).
pub const MAX_BPS: u64 = 10_000;

/// Label the marketplace is instantiated under.
pub const MARKETPLACE_LABEL: &str = "SG Marketplace";

/// Valid `(min, max)` window in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiryRange {
    pub min: u64,
    pub max: u64,
}

impl ExpiryRange {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    pub fn validate(&self) -> Result<(), MarketplaceConfigError> {
        if self.min > self.max {
            return Err(MarketplaceConfigError::InvalidExpiryRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// A span of blocks or of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Duration {
    Height(u64),
    Time(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketplaceConfigError {
    #[error("invalid expiration range: min {min} > max {max}")]
    InvalidExpiryRange { min: u64, max: u64 },

    #[error("{field} of {bps} bps exceeds 10000")]
    FeeTooHigh { field: &'static str, bps: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceInstantiateMsg {
    pub trading_fee_bps: u64,
    pub ask_expiry: ExpiryRange,
    pub bid_expiry: ExpiryRange,
    pub operators: Vec<String>,
    pub max_finders_fee_bps: u64,
    pub min_price: u64,
    pub stale_bid_duration: Duration,
    pub bid_removal_reward_bps: u64,
    pub listing_fee: u64,
}

impl Default for MarketplaceInstantiateMsg {
    /// The configuration the e2e suite deploys: 2% trading fee, asks and bids
    /// valid between 24h and 6 months.
    fn default() -> Self {
        Self {
            trading_fee_bps: 200,
            ask_expiry: ExpiryRange::new(DAY_SECS, 180 * DAY_SECS),
            bid_expiry: ExpiryRange::new(DAY_SECS, 180 * DAY_SECS),
            operators: vec!["Operator1".to_string()],
            max_finders_fee_bps: 1000,
            min_price: 5,
            stale_bid_duration: Duration::Height(100),
            bid_removal_reward_bps: 500,
            listing_fee: 0,
        }
    }
}

impl MarketplaceInstantiateMsg {
    /// The checks the contract runs on instantiate that do not need chain state.
    pub fn validate(&self) -> Result<(), MarketplaceConfigError> {
        self.ask_expiry.validate()?;
        self.bid_expiry.validate()?;
        for (field, bps) in [
            ("trading_fee_bps", self.trading_fee_bps),
            ("max_finders_fee_bps", self.max_finders_fee_bps),
            ("bid_removal_reward_bps", self.bid_removal_reward_bps),
        ] {
            if bps > MAX_BPS {
                return Err(MarketplaceConfigError::FeeTooHigh { field, bps });
            }
        }
        Ok(())
    }
}
