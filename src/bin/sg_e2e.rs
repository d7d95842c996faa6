//! sg-e2e: deploy compiled contracts onto a fresh simulated chain
//!
//! Boots a chain with the suite's genesis accounts, stores each contract
//! through the bytecode cache and reports what the chain assigned.
//!
//! ## Example Usage
//!
//! ```bash
//! # Store two contracts from ./contracts
//! sg-e2e deploy sg_marketplace.wasm sg721_base.wasm
//!
//! # Store and instantiate the marketplace, JSON report
//! sg-e2e --json deploy sg_marketplace.wasm --instantiate-marketplace
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use sg_e2e::logging::{init_tracing, DEFAULT_FILTER};
use sg_e2e::sg_contract_cache::MetricsSnapshot;
use sg_e2e::sg_e2e_core::{instantiate_marketplace, store_contract};
use sg_e2e::sg_e2e_types::Addr;
use sg_e2e::{Genesis, SuiteConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "sg-e2e",
    author,
    version,
    about = "Deploy contracts onto a simulated Stargaze chain"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding compiled .wasm files [env: SG_E2E_CONTRACTS_DIR]
    #[arg(long, global = true)]
    contracts_dir: Option<PathBuf>,

    /// Chain id of the simulated chain [env: SG_E2E_CHAIN_ID]
    #[arg(long, global = true)]
    chain_id: Option<String>,

    /// Genesis block time, RFC3339 [env: SG_E2E_START_TIME]
    #[arg(long, global = true)]
    start_time: Option<String>,

    /// Output as JSON instead of human-readable format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Store contracts and optionally instantiate the marketplace
    Deploy(DeployCmd),
}

#[derive(Args, Debug)]
struct DeployCmd {
    /// Contract file names, relative to the contracts directory
    #[arg(required = true)]
    contracts: Vec<String>,

    /// Instantiate the first contract with the default marketplace config
    #[arg(long)]
    instantiate_marketplace: bool,
}

#[derive(Debug, Serialize)]
struct StoredContract {
    contract: String,
    code_id: u64,
    checksum: String,
    size: usize,
}

#[derive(Debug, Serialize)]
struct DeployReport {
    chain_id: String,
    height: u64,
    deployer: Addr,
    contracts: Vec<StoredContract>,
    marketplace: Option<Addr>,
    cache: MetricsSnapshot,
}

impl DeployCmd {
    fn execute(&self, config: &SuiteConfig) -> Result<DeployReport> {
        let cache = config.contracts_cache();
        let genesis = Genesis::from_config(config)?;
        let Genesis { chain, ctx, .. } = &genesis;
        let deployer = genesis.deployer().address.clone();

        let mut contracts = Vec::with_capacity(self.contracts.len());
        for contract in &self.contracts {
            let code_id = store_contract(ctx, chain, &cache, &deployer, contract)
                .with_context(|| format!("deploying {}", contract))?;
            let info = chain
                .code_info(code_id)
                .with_context(|| format!("code {} missing after store", code_id))?;
            contracts.push(StoredContract {
                contract: contract.clone(),
                code_id,
                checksum: info.checksum,
                size: info.size,
            });
        }

        let marketplace = if self.instantiate_marketplace {
            let Some(first) = contracts.first() else {
                bail!("no contract to instantiate as marketplace");
            };
            let address = instantiate_marketplace(ctx, chain, &deployer, first.code_id)
                .with_context(|| format!("instantiating {} as marketplace", first.contract))?;
            Some(address)
        } else {
            None
        };

        Ok(DeployReport {
            chain_id: ctx.chain_id.clone(),
            height: ctx.height,
            deployer,
            contracts,
            marketplace,
            cache: cache.metrics().snapshot(),
        })
    }
}

fn format_report(report: &DeployReport, json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(report).context("encoding report");
    }
    let mut out = format!(
        "Chain {} at height {} (deployer {})\n",
        report.chain_id, report.height, report.deployer
    );
    for c in &report.contracts {
        out.push_str(&format!(
            "  code {:>3}  {}  {} bytes  {}\n",
            c.code_id, c.checksum, c.size, c.contract
        ));
    }
    if let Some(addr) = &report.marketplace {
        out.push_str(&format!("Marketplace: {}\n", addr));
    }
    out.push_str(&format!(
        "Cache: {} loads, {} hits, {} bytes",
        report.cache.loads, report.cache.hits, report.cache.bytes_loaded
    ));
    Ok(out)
}

fn run(cli: Cli) -> Result<()> {
    let mut config = SuiteConfig::from_env();
    if let Some(dir) = cli.contracts_dir {
        config = config.with_contracts_dir(dir);
    }
    if let Some(chain_id) = cli.chain_id {
        config = config.with_chain_id(chain_id);
    }
    if let Some(start_time) = cli.start_time {
        config = config.with_start_time(start_time);
    }

    match cli.command {
        Commands::Deploy(cmd) => {
            let report = cmd.execute(&config)?;
            println!("{}", format_report(&report, cli.json)?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing(DEFAULT_FILTER);
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
