//! # Simulated chain
//!
//! An in-process stand-in for a chain's wasm module, used as the
//! [`MsgServer`](crate::MsgServer) in e2e tests. It enforces the rules tests
//! assert on and nothing more: there is no VM, contract code is stored but
//! never executed.
//!
//! - Upload access control (`WasmParams::code_upload_access`)
//! - Per-code instantiate permissions, bounded by the chain default
//! - Sequential code ids and contract instance ids starting at 1
//! - Basic payload checks (wasm magic and size, label, JSON object msg, funds)
//! - Bank balances, with instantiate funds moved to the new contract
//! - Cheap branching for per-test scratch state
//!
//! ## Module Organization
//!
//! - [`chain`]: `SimulatedChain` and its `MsgServer` implementation
//! - [`errors`]: `ChainError`
//! - [`params`]: `WasmParams` and size limits
//! - [`state`]: `ChainState`, `CodeInfo`, `ContractInfo`

pub mod chain;
pub mod errors;
pub mod params;
pub mod state;

pub use chain::{contract_address, SimulatedChain};
pub use errors::ChainError;
pub use params::{WasmParams, MAX_LABEL_SIZE, MAX_WASM_SIZE, WASM_MAGIC};
pub use state::{ChainState, CodeInfo, ContractInfo};
