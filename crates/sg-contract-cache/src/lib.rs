//! Load-once cache for compiled contract bytecode.
//!
//! This crate provides:
//! - `BytecodeCache`: Concurrency-safe memoization of contract binaries keyed by file name
//! - `ContractSource` / `FsContractSource`: Where bytes come from on a cache miss
//! - `CacheMetrics`: Hit / load / failure counters for reporting

pub mod cache;
pub mod errors;
pub mod metrics;
pub mod paths;
pub mod source;

pub use cache::BytecodeCache;
pub use errors::LoadError;
pub use metrics::{CacheMetrics, MetricsSnapshot};
pub use paths::DEFAULT_CONTRACTS_DIR;
pub use source::{ContractSource, FsContractSource};
