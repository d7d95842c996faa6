//! Shared setup for e2e test cases.
//!
//! `E2eSuite::setup` runs once: it funds the genesis accounts, opens code
//! upload and stores the marketplace contract. Each test case then takes a
//! [`E2eSuite::branch`] and mutates that copy, leaving the parent untouched.

use anyhow::{bail, ensure, Context, Result};
use sg_contract_cache::BytecodeCache;
use sg_e2e_core::simulation::WasmParams;
use sg_e2e_core::{store_contract, ChainContext, SimulatedChain};
use tracing::info;

use crate::accounts::{generate_accounts, genesis_balances, Account};
use crate::config::SuiteConfig;

/// Code id the marketplace must receive on a fresh chain.
pub const MARKETPLACE_CODE_ID: u64 = 1;

/// Funded accounts, a chain with code upload open, and the genesis block
/// context. The starting point for both the suite and the CLI.
pub struct Genesis {
    pub accounts: Vec<Account>,
    pub chain: SimulatedChain,
    pub ctx: ChainContext,
}

impl Genesis {
    pub fn from_config(config: &SuiteConfig) -> Result<Self> {
        if config.account_count == 0 {
            bail!("suite needs at least one account to deploy from");
        }
        let start_time = config.parsed_start_time()?;
        let accounts = generate_accounts(config.account_count);
        let chain = SimulatedChain::with_genesis(genesis_balances(
            &accounts,
            &config.denom,
            config.initial_balance,
        ));
        chain.set_params(WasmParams::permissionless());
        let ctx = ChainContext::genesis(config.chain_id.clone(), start_time);
        Ok(Self {
            accounts,
            chain,
            ctx,
        })
    }

    /// The first account; deploys everything during setup.
    pub fn deployer(&self) -> &Account {
        &self.accounts[0]
    }
}

pub struct E2eSuite {
    config: SuiteConfig,
    accounts: Vec<Account>,
    chain: SimulatedChain,
    ctx: ChainContext,
    marketplace_code_id: u64,
}

impl E2eSuite {
    /// Boot the genesis chain and store the marketplace as code id 1.
    ///
    /// Bytecode is read through `cache`, never from `config.contracts_dir`
    /// directly; build the cache with [`SuiteConfig::contracts_cache`] to read
    /// from the configured directory.
    pub fn setup(config: SuiteConfig, cache: &BytecodeCache) -> Result<Self> {
        let Genesis {
            accounts,
            chain,
            ctx,
        } = Genesis::from_config(&config)?;

        let deployer = &accounts[0].address;
        let marketplace_code_id = store_contract(
            &ctx,
            &chain,
            cache,
            deployer,
            &config.marketplace_contract,
        )
        .with_context(|| {
            format!(
                "storing {} from {}",
                config.marketplace_contract,
                cache.source_description()
            )
        })?;
        ensure!(
            marketplace_code_id == MARKETPLACE_CODE_ID,
            "marketplace stored as code id {}, expected {}",
            marketplace_code_id,
            MARKETPLACE_CODE_ID
        );

        info!(
            chain_id = %ctx.chain_id,
            accounts = accounts.len(),
            marketplace_code_id,
            "suite ready"
        );
        Ok(Self {
            config,
            accounts,
            chain,
            ctx,
            marketplace_code_id,
        })
    }

    /// A scratch context and chain for one test case.
    pub fn branch(&self) -> (ChainContext, SimulatedChain) {
        (self.ctx.clone(), self.chain.branch())
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// The account that deployed the marketplace.
    pub fn deployer(&self) -> &Account {
        &self.accounts[0]
    }

    pub fn chain(&self) -> &SimulatedChain {
        &self.chain
    }

    pub fn context(&self) -> &ChainContext {
        &self.ctx
    }

    pub fn marketplace_code_id(&self) -> u64 {
        self.marketplace_code_id
    }
}
