//! Rejections produced by the simulated chain.
//!
//! Messages mirror the wasm module's wording where a test is likely to match
//! on them (`unauthorized`, `not found`).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("unauthorized: can not {action}")]
    Unauthorized { action: &'static str },

    #[error("invalid address {address}: {field}")]
    InvalidAddress { field: &'static str, address: String },

    #[error("empty wasm code")]
    EmptyWasm,

    #[error("invalid wasm code: {0}")]
    InvalidWasm(String),

    #[error("wasm code too large: {size} bytes exceeds limit of {max}")]
    WasmTooLarge { size: usize, max: usize },

    #[error("not found: no such code {0}")]
    NoSuchCode(u64),

    #[error("invalid label: {0}")]
    InvalidLabel(String),

    #[error("invalid instantiate msg: {0}")]
    InvalidMsg(String),

    #[error("invalid coins: {0}")]
    InvalidCoins(String),

    #[error("insufficient funds: {available}{denom} is smaller than {needed}{denom}")]
    InsufficientFunds {
        denom: String,
        needed: u128,
        available: u128,
    },
}

impl ChainError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ChainError::Unauthorized { .. })
    }
}
