//! # sg-e2e
//!
//! End-to-end harness for Stargaze contracts. Ties the workspace together:
//!
//! - [`config`]: `SuiteConfig`, defaults and `SG_E2E_*` overrides
//! - [`accounts`]: deterministic, funded genesis accounts
//! - [`suite`]: `Genesis` bootstrap and `E2eSuite`, one-time setup plus
//!   per-test branches
//! - [`logging`]: tracing subscriber setup
//!
//! Bytecode caching lives in [`sg_contract_cache`]; the deployment driver and
//! simulated chain live in [`sg_e2e_core`]. Both are re-exported here.

pub mod accounts;
pub mod config;
pub mod logging;
pub mod suite;

pub use sg_contract_cache;
pub use sg_e2e_core;
pub use sg_e2e_types;

pub use accounts::{generate_accounts, genesis_balances, Account};
pub use config::SuiteConfig;
pub use suite::{E2eSuite, Genesis};
