//! The message-dispatch seam between the driver and the chain under test.

use anyhow::Result;
use std::sync::Arc;

use crate::context::ChainContext;
use crate::msg::{
    MsgInstantiateContract, MsgInstantiateContractResponse, MsgStoreCode, MsgStoreCodeResponse,
};

/// Message-processing entry point of a chain's wasm module.
///
/// Implementations own their state and its synchronization; callers submit one
/// message per call and get back either the full response or an error. The
/// error type is whatever the implementation produces; the simulated chain
/// returns a [`ChainError`](crate::ChainError) inside the `anyhow::Error`.
pub trait MsgServer: Send + Sync {
    fn store_code(&self, ctx: &ChainContext, msg: MsgStoreCode) -> Result<MsgStoreCodeResponse>;

    fn instantiate_contract(
        &self,
        ctx: &ChainContext,
        msg: MsgInstantiateContract,
    ) -> Result<MsgInstantiateContractResponse>;
}

impl<T: MsgServer + ?Sized> MsgServer for &T {
    fn store_code(&self, ctx: &ChainContext, msg: MsgStoreCode) -> Result<MsgStoreCodeResponse> {
        (**self).store_code(ctx, msg)
    }

    fn instantiate_contract(
        &self,
        ctx: &ChainContext,
        msg: MsgInstantiateContract,
    ) -> Result<MsgInstantiateContractResponse> {
        (**self).instantiate_contract(ctx, msg)
    }
}

impl<T: MsgServer + ?Sized> MsgServer for Arc<T> {
    fn store_code(&self, ctx: &ChainContext, msg: MsgStoreCode) -> Result<MsgStoreCodeResponse> {
        (**self).store_code(ctx, msg)
    }

    fn instantiate_contract(
        &self,
        ctx: &ChainContext,
        msg: MsgInstantiateContract,
    ) -> Result<MsgInstantiateContractResponse> {
        (**self).instantiate_contract(ctx, msg)
    }
}

impl<T: MsgServer + ?Sized> MsgServer for Box<T> {
    fn store_code(&self, ctx: &ChainContext, msg: MsgStoreCode) -> Result<MsgStoreCodeResponse> {
        (**self).store_code(ctx, msg)
    }

    fn instantiate_contract(
        &self,
        ctx: &ChainContext,
        msg: MsgInstantiateContract,
    ) -> Result<MsgInstantiateContractResponse> {
        (**self).instantiate_contract(ctx, msg)
    }
}
