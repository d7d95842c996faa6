//! Wasm module messages understood by a [`MsgServer`](crate::MsgServer).

use serde::{Deserialize, Serialize};
use sg_e2e_types::{Addr, Coin};

/// Who may upload code, or instantiate a given code id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessConfig {
    Nobody,
    Everybody,
    AnyOfAddresses(Vec<Addr>),
}

impl AccessConfig {
    /// Whether `actor` is permitted.
    pub fn allowed(&self, actor: &Addr) -> bool {
        match self {
            AccessConfig::Nobody => false,
            AccessConfig::Everybody => true,
            AccessConfig::AnyOfAddresses(addrs) => addrs.contains(actor),
        }
    }

    /// Whether every actor allowed by `self` is also allowed by `other`.
    pub fn is_subset_of(&self, other: &AccessConfig) -> bool {
        match (self, other) {
            (AccessConfig::Nobody, _) => true,
            (_, AccessConfig::Everybody) => true,
            (AccessConfig::Everybody, _) => false,
            (AccessConfig::AnyOfAddresses(_), AccessConfig::Nobody) => false,
            (AccessConfig::AnyOfAddresses(mine), AccessConfig::AnyOfAddresses(theirs)) => {
                mine.iter().all(|a| theirs.contains(a))
            }
        }
    }
}

/// Upload contract bytecode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgStoreCode {
    pub sender: String,
    pub wasm_byte_code: Vec<u8>,
    /// Overrides the chain's default instantiate permission for this code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instantiate_permission: Option<AccessConfig>,
}

impl MsgStoreCode {
    pub const TYPE_URL: &'static str = "/cosmwasm.wasm.v1.MsgStoreCode";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgStoreCodeResponse {
    pub code_id: u64,
    /// Hex sha256 of the stored bytecode.
    pub checksum: String,
}

/// Create a contract instance from stored code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgInstantiateContract {
    pub sender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<String>,
    pub code_id: u64,
    pub label: String,
    /// JSON-encoded instantiate message.
    pub msg: Vec<u8>,
    #[serde(default)]
    pub funds: Vec<Coin>,
}

impl MsgInstantiateContract {
    pub const TYPE_URL: &'static str = "/cosmwasm.wasm.v1.MsgInstantiateContract";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgInstantiateContractResponse {
    pub address: Addr,
}
