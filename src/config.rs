//! Suite configuration.
//!
//! Defaults describe the standard local test chain. `SuiteConfig::from_env`
//! overrides them from `SG_E2E_*` variables; the CLI overrides both.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sg_contract_cache::{BytecodeCache, DEFAULT_CONTRACTS_DIR};
use sg_e2e_types::env_utils::{env_path_or, env_string_or, env_var_or};
use sg_e2e_types::{TEST_CHAIN_DENOM, TEST_CHAIN_ID};
use std::path::PathBuf;

pub const DEFAULT_START_TIME: &str = "2023-01-01T00:00:00Z";
pub const DEFAULT_ACCOUNT_COUNT: usize = 10;
pub const DEFAULT_INITIAL_BALANCE: u128 = 1_000_000_000_000;
pub const DEFAULT_MARKETPLACE_CONTRACT: &str = "sg_marketplace.wasm";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Directory holding the compiled `.wasm` files.
    pub contracts_dir: PathBuf,
    pub chain_id: String,
    pub denom: String,
    /// Genesis block time, RFC3339.
    pub start_time: String,
    /// Number of funded accounts created at genesis.
    pub account_count: usize,
    /// Genesis balance of each account, in `denom`.
    pub initial_balance: u128,
    /// Contract stored during setup; expected to receive code id 1.
    pub marketplace_contract: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            contracts_dir: PathBuf::from(DEFAULT_CONTRACTS_DIR),
            chain_id: TEST_CHAIN_ID.to_string(),
            denom: TEST_CHAIN_DENOM.to_string(),
            start_time: DEFAULT_START_TIME.to_string(),
            account_count: DEFAULT_ACCOUNT_COUNT,
            initial_balance: DEFAULT_INITIAL_BALANCE,
            marketplace_contract: DEFAULT_MARKETPLACE_CONTRACT.to_string(),
        }
    }
}

impl SuiteConfig {
    /// Defaults, overridden by any `SG_E2E_*` variable that is set.
    ///
    /// Unparseable numeric values fall back to the default.
    pub fn from_env() -> Self {
        Self {
            contracts_dir: env_path_or("SG_E2E_CONTRACTS_DIR", DEFAULT_CONTRACTS_DIR),
            chain_id: env_string_or("SG_E2E_CHAIN_ID", TEST_CHAIN_ID),
            denom: env_string_or("SG_E2E_DENOM", TEST_CHAIN_DENOM),
            start_time: env_string_or("SG_E2E_START_TIME", DEFAULT_START_TIME),
            account_count: env_var_or("SG_E2E_ACCOUNT_COUNT", DEFAULT_ACCOUNT_COUNT),
            initial_balance: env_var_or("SG_E2E_INITIAL_BALANCE", DEFAULT_INITIAL_BALANCE),
            marketplace_contract: env_string_or(
                "SG_E2E_MARKETPLACE_CONTRACT",
                DEFAULT_MARKETPLACE_CONTRACT,
            ),
        }
    }

    pub fn with_contracts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.contracts_dir = dir.into();
        self
    }

    pub fn with_chain_id(mut self, chain_id: impl Into<String>) -> Self {
        self.chain_id = chain_id.into();
        self
    }

    pub fn with_start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = start_time.into();
        self
    }

    /// A fresh bytecode cache over `contracts_dir`.
    pub fn contracts_cache(&self) -> BytecodeCache {
        BytecodeCache::from_dir(&self.contracts_dir)
    }

    pub fn parsed_start_time(&self) -> Result<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.start_time)
            .map(|t| t.with_timezone(&Utc))
            .with_context(|| format!("invalid suite start time {:?}", self.start_time))
    }
}
