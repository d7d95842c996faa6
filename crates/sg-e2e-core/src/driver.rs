//! Deployment driver: bytecode from the cache, messages to the dispatcher.
//!
//! Every function here is single-shot. It either returns the identifier the
//! chain assigned or an error; nothing is retried and no state is kept between
//! calls.

use serde::Serialize;
use sg_contract_cache::{BytecodeCache, LoadError};
use sg_e2e_types::{Addr, Coin};
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::context::ChainContext;
use crate::dispatcher::MsgServer;
use crate::marketplace::{MarketplaceConfigError, MarketplaceInstantiateMsg, MARKETPLACE_LABEL};
use crate::msg::{AccessConfig, MsgInstantiateContract, MsgStoreCode};
use crate::simulation::ChainError;

/// The dispatcher rejected a message.
///
/// Carries the dispatcher's own error untouched; [`DispatchError::chain_error`]
/// recovers it when the dispatcher is the simulated chain.
#[derive(Debug)]
pub struct DispatchError {
    msg_type: &'static str,
    source: anyhow::Error,
}

impl DispatchError {
    pub fn new(msg_type: &'static str, source: anyhow::Error) -> Self {
        Self { msg_type, source }
    }

    /// Type URL of the rejected message.
    pub fn msg_type(&self) -> &'static str {
        self.msg_type
    }

    /// The dispatcher's error.
    pub fn cause(&self) -> &anyhow::Error {
        &self.source
    }

    pub fn chain_error(&self) -> Option<&ChainError> {
        self.source.downcast_ref::<ChainError>()
    }

    pub fn is_unauthorized(&self) -> bool {
        self.chain_error().is_some_and(ChainError::is_unauthorized)
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.msg_type, self.source)
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.source)
    }
}

#[derive(Debug, Error)]
pub enum DeployError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("failed to encode instantiate msg: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("invalid marketplace config: {0}")]
    Config(#[from] MarketplaceConfigError),
}

impl DeployError {
    pub fn is_load(&self) -> bool {
        matches!(self, DeployError::Load(_))
    }

    pub fn is_dispatch(&self) -> bool {
        matches!(self, DeployError::Dispatch(_))
    }

    pub fn chain_error(&self) -> Option<&ChainError> {
        match self {
            DeployError::Dispatch(e) => e.chain_error(),
            _ => None,
        }
    }
}

/// Upload `contract` from the cache and return the code id the chain assigned.
pub fn store_contract<D: MsgServer + ?Sized>(
    ctx: &ChainContext,
    dispatcher: &D,
    cache: &BytecodeCache,
    sender: &Addr,
    contract: &str,
) -> Result<u64, DeployError> {
    store_contract_with_permission(ctx, dispatcher, cache, sender, contract, None)
}

/// [`store_contract`] with an explicit instantiate permission on the upload.
pub fn store_contract_with_permission<D: MsgServer + ?Sized>(
    ctx: &ChainContext,
    dispatcher: &D,
    cache: &BytecodeCache,
    sender: &Addr,
    contract: &str,
    instantiate_permission: Option<AccessConfig>,
) -> Result<u64, DeployError> {
    let bytecode = cache.get(contract)?;
    let msg = MsgStoreCode {
        sender: sender.to_string(),
        wasm_byte_code: bytecode.to_vec(),
        instantiate_permission,
    };
    let res = dispatcher
        .store_code(ctx, msg)
        .map_err(|e| DispatchError::new(MsgStoreCode::TYPE_URL, e))?;

    debug!(contract, code_id = res.code_id, %sender, "stored contract");
    Ok(res.code_id)
}

/// Instantiate `code_id` with `msg` encoded as JSON; returns the new address.
#[allow(clippy::too_many_arguments)]
pub fn instantiate_contract<D, M>(
    ctx: &ChainContext,
    dispatcher: &D,
    sender: &Addr,
    admin: Option<&Addr>,
    code_id: u64,
    label: &str,
    msg: &M,
    funds: Vec<Coin>,
) -> Result<Addr, DeployError>
where
    D: MsgServer + ?Sized,
    M: Serialize + ?Sized,
{
    let raw = serde_json::to_vec(msg)?;
    let res = dispatcher
        .instantiate_contract(
            ctx,
            MsgInstantiateContract {
                sender: sender.to_string(),
                admin: admin.map(Addr::to_string),
                code_id,
                label: label.to_string(),
                msg: raw,
                funds,
            },
        )
        .map_err(|e| DispatchError::new(MsgInstantiateContract::TYPE_URL, e))?;

    debug!(code_id, address = %res.address, label, "instantiated contract");
    Ok(res.address)
}

/// Instantiate the marketplace with the suite's default configuration,
/// `account` acting as both sender and admin.
pub fn instantiate_marketplace<D: MsgServer + ?Sized>(
    ctx: &ChainContext,
    dispatcher: &D,
    account: &Addr,
    code_id: u64,
) -> Result<Addr, DeployError> {
    instantiate_marketplace_with(
        ctx,
        dispatcher,
        account,
        code_id,
        &MarketplaceInstantiateMsg::default(),
    )
}

/// [`instantiate_marketplace`] with an explicit configuration. The
/// configuration is validated before anything is sent.
pub fn instantiate_marketplace_with<D: MsgServer + ?Sized>(
    ctx: &ChainContext,
    dispatcher: &D,
    account: &Addr,
    code_id: u64,
    config: &MarketplaceInstantiateMsg,
) -> Result<Addr, DeployError> {
    config.validate()?;
    instantiate_contract(
        ctx,
        dispatcher,
        account,
        Some(account),
        code_id,
        MARKETPLACE_LABEL,
        config,
        Vec::new(),
    )
}
