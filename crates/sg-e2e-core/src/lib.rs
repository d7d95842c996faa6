//! # sg-e2e-core
//!
//! Deployment plumbing for end-to-end contract tests:
//!
//! - [`dispatcher`]: the [`MsgServer`] trait, the message-processing entry point
//!   of the chain under test
//! - [`msg`]: store-code / instantiate messages and access configuration
//! - [`driver`]: [`store_contract`] and [`instantiate_contract`], which pull
//!   bytecode from a [`BytecodeCache`](sg_contract_cache::BytecodeCache) and
//!   submit it through a `MsgServer`
//! - [`marketplace`]: the marketplace contract's instantiate payload
//! - [`simulation`]: an in-process chain implementing `MsgServer`
//!
//! ## Example
//!
//! ```no_run
//! use sg_contract_cache::BytecodeCache;
//! use sg_e2e_core::{store_contract, ChainContext, SimulatedChain};
//! use sg_e2e_core::msg::AccessConfig;
//! use sg_e2e_core::simulation::WasmParams;
//! use sg_e2e_types::Addr;
//!
//! let cache = BytecodeCache::from_dir("contracts");
//! let chain = SimulatedChain::new();
//! chain.set_params(WasmParams {
//!     code_upload_access: AccessConfig::Everybody,
//!     ..WasmParams::default()
//! });
//! let ctx = ChainContext::genesis("stargaze-test-1", chrono::Utc::now());
//! let creator = Addr::from_bytes(&[1u8; 20]);
//!
//! let code_id = store_contract(&ctx, &chain, &cache, &creator, "sg_marketplace.wasm").unwrap();
//! assert_eq!(code_id, 1);
//! ```

pub mod context;
pub mod dispatcher;
pub mod driver;
pub mod marketplace;
pub mod msg;
pub mod simulation;

pub use context::ChainContext;
pub use dispatcher::MsgServer;
pub use driver::{
    instantiate_contract, instantiate_marketplace, instantiate_marketplace_with, store_contract,
    store_contract_with_permission, DeployError, DispatchError,
};
pub use marketplace::{Duration, ExpiryRange, MarketplaceConfigError, MarketplaceInstantiateMsg};
pub use simulation::{ChainError, SimulatedChain};
