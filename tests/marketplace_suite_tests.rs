//! Marketplace deployment against a suite chain.
//!
//! Setup stores the marketplace once; every test works on its own branch.

mod common;

use common::{assert_error_contains, assert_ok, suite_fixture};
use sg_e2e::sg_e2e_core::msg::AccessConfig;
use sg_e2e::sg_e2e_core::simulation::{contract_address, WasmParams};
use sg_e2e::sg_e2e_core::{
    instantiate_contract, instantiate_marketplace, store_contract, store_contract_with_permission,
    DeployError, MarketplaceInstantiateMsg,
};
use sg_e2e::sg_e2e_types::coin::coins;

#[test]
fn test_suite_stores_marketplace_as_first_code() {
    let (_fixture, cache, suite) = suite_fixture(&[]);

    assert_eq!(suite.marketplace_code_id(), 1);
    assert_eq!(suite.chain().last_code_id(), 1);
    assert_eq!(cache.keys(), vec!["sg_marketplace.wasm".to_string()]);
    assert_eq!(cache.metrics().snapshot().loads, 1);
}

#[test]
fn test_instantiate_marketplace_on_branch() {
    let (_fixture, _cache, suite) = suite_fixture(&[]);
    let (ctx, chain) = suite.branch();
    let owner = &suite.accounts()[1].address;

    let address = assert_ok(
        instantiate_marketplace(&ctx, &chain, owner, suite.marketplace_code_id()),
        "instantiate marketplace",
    );
    assert_eq!(address, contract_address(1, 1));
    assert!(address.is_module_address());

    let info = chain.contract_info(&address).unwrap();
    assert_eq!(info.label, "SG Marketplace");
    assert_eq!(info.admin.as_ref(), Some(owner));
    assert_eq!(info.creator, *owner);
    assert_eq!(
        info.init_msg,
        serde_json::to_value(MarketplaceInstantiateMsg::default()).unwrap()
    );

    assert!(suite.chain().contract_info(&address).is_none());
}

#[test]
fn test_restricted_marketplace_rejects_other_accounts() {
    let (_fixture, cache, suite) = suite_fixture(&[]);
    let (ctx, chain) = suite.branch();
    let deployer = &suite.deployer().address;
    let stranger = &suite.accounts()[2].address;

    let code_id = assert_ok(
        store_contract_with_permission(
            &ctx,
            &chain,
            &cache,
            deployer,
            "sg_marketplace.wasm",
            Some(AccessConfig::AnyOfAddresses(vec![deployer.clone()])),
        ),
        "store restricted marketplace",
    );
    assert_eq!(code_id, 2);
    // Second store of the same contract is served from memory.
    assert_eq!(cache.metrics().snapshot().loads, 1);

    let err = instantiate_marketplace(&ctx, &chain, stranger, code_id).unwrap_err();
    let DeployError::Dispatch(dispatch) = &err else {
        panic!("expected dispatch error, got {:?}", err);
    };
    assert!(dispatch.is_unauthorized());
    assert_error_contains(&err, "unauthorized", "stranger instantiating restricted code");
    assert!(chain.contracts_by_code(code_id).is_empty());

    assert_ok(
        instantiate_marketplace(&ctx, &chain, deployer, code_id),
        "deployer instantiates",
    );
}

#[test]
fn test_closed_upload_rejects_store() {
    let (_fixture, cache, suite) = suite_fixture(&["sg721_base.wasm"]);
    let (ctx, chain) = suite.branch();
    chain.set_params(WasmParams::default());

    let err = store_contract(&ctx, &chain, &cache, &suite.deployer().address, "sg721_base.wasm")
        .unwrap_err();
    assert!(err.is_dispatch());
    assert!(err.chain_error().is_some_and(|e| e.is_unauthorized()));
    assert_eq!(chain.last_code_id(), 1);

    // The binary was still loaded and stays cached.
    assert!(cache.contains("sg721_base.wasm"));
}

#[test]
fn test_missing_binary_is_load_error() {
    let (_fixture, cache, suite) = suite_fixture(&[]);
    let (ctx, chain) = suite.branch();

    let err =
        store_contract(&ctx, &chain, &cache, &suite.deployer().address, "nope.wasm").unwrap_err();
    match &err {
        DeployError::Load(load) => assert!(load.is_not_found()),
        other => panic!("expected load error, got {:?}", other),
    }
    assert_eq!(cache.metrics().snapshot().load_failures, 1);
    assert_eq!(chain.last_code_id(), 1);
}

#[test]
fn test_branches_are_isolated() {
    let (_fixture, _cache, suite) = suite_fixture(&[]);
    let owner = &suite.deployer().address;

    let (ctx_a, chain_a) = suite.branch();
    let (ctx_b, chain_b) = suite.branch();
    let a = instantiate_marketplace(&ctx_a, &chain_a, owner, 1).unwrap();
    let b = instantiate_marketplace(&ctx_b, &chain_b, owner, 1).unwrap();

    // Same instance sequence on both branches, no cross-visibility.
    assert_eq!(a, b);
    assert_eq!(chain_a.contracts_by_code(1).len(), 1);
    assert_eq!(chain_b.contracts_by_code(1).len(), 1);
    assert!(suite.chain().contracts_by_code(1).is_empty());
}

#[test]
fn test_instantiate_with_funds_moves_balance() {
    let (_fixture, _cache, suite) = suite_fixture(&[]);
    let (ctx, chain) = suite.branch();
    let sender = &suite.accounts()[3].address;
    let denom = &suite.config().denom;
    let before = chain.balance(sender, denom);

    let address = instantiate_contract(
        &ctx,
        &chain,
        sender,
        None,
        1,
        "funded marketplace",
        &MarketplaceInstantiateMsg::default(),
        coins(1_000, denom.as_str()),
    )
    .unwrap();

    assert_eq!(chain.balance(sender, denom), before - 1_000);
    assert_eq!(chain.balance(&address, denom), 1_000);
    assert!(chain.contract_info(&address).unwrap().admin.is_none());
    assert_eq!(suite.chain().balance(sender, denom), before);
}
