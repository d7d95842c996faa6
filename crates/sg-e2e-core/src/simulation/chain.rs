//! In-process chain implementing the wasm module's store / instantiate rules.

use anyhow::Result;
use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use sg_e2e_types::{Addr, Coin};
use std::collections::BTreeSet;
use tracing::{debug, info};

use super::errors::ChainError;
use super::params::{WasmParams, MAX_LABEL_SIZE, MAX_WASM_SIZE, WASM_MAGIC};
use super::state::{ChainState, CodeInfo, ContractInfo};
use crate::context::ChainContext;
use crate::dispatcher::MsgServer;
use crate::msg::{
    MsgInstantiateContract, MsgInstantiateContractResponse, MsgStoreCode, MsgStoreCodeResponse,
};

/// Module name used for contract address derivation.
const WASM_MODULE_NAME: &str = "wasm";

/// A simulated chain whose wasm module accepts store-code and instantiate
/// messages.
///
/// State sits behind one `RwLock`; each message runs all of its checks and
/// then all of its writes under the write lock, so a message either applies
/// completely or not at all. Code ids and contract instance ids are assigned
/// from sequences starting at 1.
#[derive(Debug, Default)]
pub struct SimulatedChain {
    state: RwLock<ChainState>,
}

impl SimulatedChain {
    /// An empty chain with default (permissioned) params.
    pub fn new() -> Self {
        Self::default()
    }

    /// A chain whose bank starts with the given balances.
    pub fn with_genesis<I>(balances: I) -> Self
    where
        I: IntoIterator<Item = (Addr, Vec<Coin>)>,
    {
        let mut state = ChainState::default();
        for (addr, coins) in balances {
            for coin in &coins {
                state.credit(&addr, coin);
            }
        }
        Self {
            state: RwLock::new(state),
        }
    }

    /// An independent copy of the current state.
    ///
    /// Writes to the branch are invisible to `self` and vice versa, which gives
    /// each test case its own scratch chain on top of shared setup.
    pub fn branch(&self) -> SimulatedChain {
        SimulatedChain {
            state: RwLock::new(self.state.read().clone()),
        }
    }

    pub fn params(&self) -> WasmParams {
        self.state.read().params.clone()
    }

    pub fn set_params(&self, params: WasmParams) {
        debug!(?params, "updating wasm params");
        self.state.write().params = params;
    }

    pub fn code_info(&self, code_id: u64) -> Option<CodeInfo> {
        self.state.read().codes.get(&code_id).cloned()
    }

    /// Stored bytecode for `code_id`.
    pub fn code(&self, code_id: u64) -> Option<Vec<u8>> {
        self.state.read().code_bytes.get(&code_id).cloned()
    }

    /// Highest code id assigned so far (0 when nothing is stored).
    pub fn last_code_id(&self) -> u64 {
        self.state.read().last_code_id
    }

    pub fn contract_info(&self, address: &Addr) -> Option<ContractInfo> {
        self.state.read().contracts.get(address).cloned()
    }

    /// Contracts instantiated from `code_id`, in address order.
    pub fn contracts_by_code(&self, code_id: u64) -> Vec<Addr> {
        self.state
            .read()
            .contracts
            .values()
            .filter(|c| c.code_id == code_id)
            .map(|c| c.address.clone())
            .collect()
    }

    pub fn balance(&self, address: &Addr, denom: &str) -> u128 {
        self.state.read().balance(address, denom)
    }
}

impl MsgServer for SimulatedChain {
    fn store_code(&self, ctx: &ChainContext, msg: MsgStoreCode) -> Result<MsgStoreCodeResponse> {
        let creator = parse_addr("sender", &msg.sender)?;
        validate_wasm(&msg.wasm_byte_code)?;

        let mut state = self.state.write();
        if !state.params.code_upload_access.allowed(&creator) {
            return Err(ChainError::Unauthorized {
                action: "create code",
            }
            .into());
        }
        let instantiate_permission = match msg.instantiate_permission {
            Some(permission) => {
                if !permission.is_subset_of(&state.params.instantiate_default_permission) {
                    return Err(ChainError::Unauthorized {
                        action: "widen instantiate permission",
                    }
                    .into());
                }
                permission
            }
            None => state.params.instantiate_default_permission.clone(),
        };

        let checksum = hex::encode(Sha256::digest(&msg.wasm_byte_code));
        state.last_code_id += 1;
        let code_id = state.last_code_id;
        state.codes.insert(
            code_id,
            CodeInfo {
                code_id,
                creator: creator.clone(),
                checksum: checksum.clone(),
                instantiate_permission,
                size: msg.wasm_byte_code.len(),
            },
        );
        state.code_bytes.insert(code_id, msg.wasm_byte_code);

        info!(
            code_id,
            %creator,
            %checksum,
            height = ctx.height,
            chain_id = %ctx.chain_id,
            "stored contract code"
        );
        Ok(MsgStoreCodeResponse { code_id, checksum })
    }

    fn instantiate_contract(
        &self,
        ctx: &ChainContext,
        msg: MsgInstantiateContract,
    ) -> Result<MsgInstantiateContractResponse> {
        let sender = parse_addr("sender", &msg.sender)?;
        let admin = msg
            .admin
            .as_deref()
            .filter(|a| !a.is_empty())
            .map(|a| parse_addr("admin", a))
            .transpose()?;
        validate_label(&msg.label)?;
        let init_msg = parse_init_msg(&msg.msg)?;
        validate_funds(&msg.funds)?;

        let mut state = self.state.write();
        let code = state
            .codes
            .get(&msg.code_id)
            .ok_or(ChainError::NoSuchCode(msg.code_id))?;
        if !code.instantiate_permission.allowed(&sender) {
            return Err(ChainError::Unauthorized {
                action: "instantiate",
            }
            .into());
        }
        for coin in &msg.funds {
            let available = state.balance(&sender, &coin.denom);
            if available < coin.amount {
                return Err(ChainError::InsufficientFunds {
                    denom: coin.denom.clone(),
                    needed: coin.amount,
                    available,
                }
                .into());
            }
        }

        state.last_instance_id += 1;
        let address = contract_address(msg.code_id, state.last_instance_id);
        for coin in &msg.funds {
            state.debit(&sender, coin);
            state.credit(&address, coin);
        }
        state.contracts.insert(
            address.clone(),
            ContractInfo {
                address: address.clone(),
                code_id: msg.code_id,
                creator: sender.clone(),
                admin,
                label: msg.label.clone(),
                init_msg,
                created: ctx.height,
            },
        );

        info!(
            code_id = msg.code_id,
            %address,
            %sender,
            label = %msg.label,
            height = ctx.height,
            "instantiated contract"
        );
        Ok(MsgInstantiateContractResponse { address })
    }
}

/// Classic wasm contract address: module address over `code_id || instance_id`.
pub fn contract_address(code_id: u64, instance_id: u64) -> Addr {
    let mut key = [0u8; 16];
    key[..8].copy_from_slice(&code_id.to_be_bytes());
    key[8..].copy_from_slice(&instance_id.to_be_bytes());
    Addr::module(WASM_MODULE_NAME, &key)
}

fn parse_addr(field: &'static str, address: &str) -> Result<Addr, ChainError> {
    Addr::parse(address).ok_or_else(|| ChainError::InvalidAddress {
        field,
        address: address.to_string(),
    })
}

fn validate_wasm(wasm: &[u8]) -> Result<(), ChainError> {
    if wasm.is_empty() {
        return Err(ChainError::EmptyWasm);
    }
    if wasm.len() > MAX_WASM_SIZE {
        return Err(ChainError::WasmTooLarge {
            size: wasm.len(),
            max: MAX_WASM_SIZE,
        });
    }
    if !wasm.starts_with(WASM_MAGIC) {
        return Err(ChainError::InvalidWasm("missing wasm magic header".to_string()));
    }
    Ok(())
}

fn validate_label(label: &str) -> Result<(), ChainError> {
    if label.trim().is_empty() {
        return Err(ChainError::InvalidLabel("label is required".to_string()));
    }
    if label.len() > MAX_LABEL_SIZE {
        return Err(ChainError::InvalidLabel(format!(
            "label exceeds {} bytes",
            MAX_LABEL_SIZE
        )));
    }
    Ok(())
}

fn parse_init_msg(raw: &[u8]) -> Result<serde_json::Value, ChainError> {
    let value: serde_json::Value =
        serde_json::from_slice(raw).map_err(|e| ChainError::InvalidMsg(e.to_string()))?;
    if !value.is_object() {
        return Err(ChainError::InvalidMsg("must be a JSON object".to_string()));
    }
    Ok(value)
}

fn validate_funds(funds: &[Coin]) -> Result<(), ChainError> {
    let mut seen = BTreeSet::new();
    for coin in funds {
        if coin.denom.is_empty() {
            return Err(ChainError::InvalidCoins("empty denom".to_string()));
        }
        if coin.amount == 0 {
            return Err(ChainError::InvalidCoins(format!("zero amount of {}", coin.denom)));
        }
        if !seen.insert(coin.denom.as_str()) {
            return Err(ChainError::InvalidCoins(format!("duplicate denom {}", coin.denom)));
        }
    }
    Ok(())
}
