//! Deterministic test accounts and their genesis balances.

use serde::{Deserialize, Serialize};
use sg_e2e_types::address::ACCOUNT_ADDRESS_LEN;
use sg_e2e_types::{Addr, Coin};
use sha2::{Digest, Sha256};

const ACCOUNT_SEED: &[u8] = b"sg-e2e-account";

/// A named, funded account on the suite chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub address: Addr,
}

/// Account `index`: the first 20 bytes of `sha256(seed || index_be)`.
pub fn account_address(index: u64) -> Addr {
    let digest = Sha256::new()
        .chain_update(ACCOUNT_SEED)
        .chain_update(index.to_be_bytes())
        .finalize();
    Addr::from_bytes(&digest[..ACCOUNT_ADDRESS_LEN])
}

/// `n` accounts named `account0`, `account1`, ...; the same `n` always yields
/// the same addresses.
pub fn generate_accounts(n: usize) -> Vec<Account> {
    (0..n as u64)
        .map(|i| Account {
            name: format!("account{}", i),
            address: account_address(i),
        })
        .collect()
}

/// One `amount` of `denom` for each account, in the shape
/// [`SimulatedChain::with_genesis`](sg_e2e_core::SimulatedChain::with_genesis)
/// takes.
pub fn genesis_balances(accounts: &[Account], denom: &str, amount: u128) -> Vec<(Addr, Vec<Coin>)> {
    accounts
        .iter()
        .map(|a| (a.address.clone(), vec![Coin::new(amount, denom)]))
        .collect()
}
