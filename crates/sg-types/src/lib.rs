//! Shared types for the sg-e2e workspace.
//!
//! This crate provides the value types every other crate in the workspace
//! agrees on:
//!
//! - [`Addr`](address::Addr) - Normalized account / contract address
//! - [`Coin`](coin::Coin) - Denom + amount pair used for balances and funds
//! - [`env_utils`] - Typed environment-variable parsing for configuration

pub mod address;
pub mod coin;
pub mod env_utils;

pub use address::Addr;
pub use coin::Coin;

/// Chain id used by the e2e suite unless overridden.
pub const TEST_CHAIN_ID: &str = "stargaze-test-1";

/// Staking / fee denom of the test chain.
pub const TEST_CHAIN_DENOM: &str = "ustars";
