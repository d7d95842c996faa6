//! Chain state held by the simulated chain.

use serde::{Deserialize, Serialize};
use sg_e2e_types::{Addr, Coin};
use std::collections::BTreeMap;

use super::params::WasmParams;
use crate::msg::AccessConfig;

/// Metadata recorded for uploaded code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeInfo {
    pub code_id: u64,
    pub creator: Addr,
    /// Hex sha256 of the bytecode.
    pub checksum: String,
    pub instantiate_permission: AccessConfig,
    pub size: usize,
}

/// Metadata recorded for an instantiated contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractInfo {
    pub address: Addr,
    pub code_id: u64,
    pub creator: Addr,
    pub admin: Option<Addr>,
    pub label: String,
    pub init_msg: serde_json::Value,
    /// Block height of instantiation.
    pub created: u64,
}

/// Everything the wasm and bank modules track, cloneable for branching.
#[derive(Debug, Clone, Default)]
pub struct ChainState {
    pub params: WasmParams,
    pub codes: BTreeMap<u64, CodeInfo>,
    pub code_bytes: BTreeMap<u64, Vec<u8>>,
    pub contracts: BTreeMap<Addr, ContractInfo>,
    /// Account -> denom -> amount.
    pub balances: BTreeMap<Addr, BTreeMap<String, u128>>,
    pub last_code_id: u64,
    pub last_instance_id: u64,
}

impl ChainState {
    pub fn balance(&self, addr: &Addr, denom: &str) -> u128 {
        self.balances
            .get(addr)
            .and_then(|b| b.get(denom))
            .copied()
            .unwrap_or(0)
    }

    /// Saturates at `u128::MAX`.
    pub fn credit(&mut self, addr: &Addr, coin: &Coin) {
        let balance = self
            .balances
            .entry(addr.clone())
            .or_default()
            .entry(coin.denom.clone())
            .or_default();
        *balance = balance.saturating_add(coin.amount);
    }

    /// Caller must have checked the balance covers `coin`.
    pub fn debit(&mut self, addr: &Addr, coin: &Coin) {
        if let Some(amount) = self
            .balances
            .get_mut(addr)
            .and_then(|b| b.get_mut(&coin.denom))
        {
            *amount = amount.saturating_sub(coin.amount);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_saturates() {
        let addr = Addr::from_bytes(&[1u8; 20]);
        let mut state = ChainState::default();
        state.credit(&addr, &Coin::new(u128::MAX - 1, "ustars"));
        state.credit(&addr, &Coin::new(u128::MAX - 1, "ustars"));
        assert_eq!(state.balance(&addr, "ustars"), u128::MAX);
    }

    #[test]
    fn test_debit_floors_at_zero() {
        let addr = Addr::from_bytes(&[2u8; 20]);
        let mut state = ChainState::default();
        state.credit(&addr, &Coin::new(10, "ustars"));
        state.debit(&addr, &Coin::new(4, "ustars"));
        assert_eq!(state.balance(&addr, "ustars"), 6);
        state.debit(&addr, &Coin::new(100, "ustars"));
        assert_eq!(state.balance(&addr, "ustars"), 0);
        assert_eq!(state.balance(&addr, "uatom"), 0);
    }
}
