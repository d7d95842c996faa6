use assert_cmd::Command;
use predicates::prelude::*;

mod common;

use common::ContractsFixture;

fn sg_e2e() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("sg-e2e").unwrap();
    for var in [
        "SG_E2E_CONTRACTS_DIR",
        "SG_E2E_CHAIN_ID",
        "SG_E2E_START_TIME",
        "SG_E2E_ACCOUNT_COUNT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_deploy_json_report() {
    let fixture = ContractsFixture::with_contracts(&["sg_marketplace.wasm", "sg721_base.wasm"]);

    let output = sg_e2e()
        .arg("--contracts-dir")
        .arg(fixture.dir.path())
        .arg("--json")
        .arg("deploy")
        .arg("sg_marketplace.wasm")
        .arg("sg721_base.wasm")
        .arg("--instantiate-marketplace")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["chain_id"], "stargaze-test-1");
    assert_eq!(report["contracts"][0]["code_id"], 1);
    assert_eq!(report["contracts"][1]["code_id"], 2);
    assert_eq!(report["contracts"][1]["contract"], "sg721_base.wasm");
    assert_eq!(report["cache"]["loads"], 2);
    assert_eq!(report["marketplace"].as_str().unwrap().len(), 66);
}

#[test]
fn test_deploy_human_report_with_chain_id() {
    let fixture = ContractsFixture::with_contracts(&["sg_marketplace.wasm"]);

    sg_e2e()
        .arg("--contracts-dir")
        .arg(fixture.dir.path())
        .arg("--chain-id")
        .arg("stargaze-local-9")
        .arg("deploy")
        .arg("sg_marketplace.wasm")
        .assert()
        .success()
        .stdout(predicate::str::contains("Chain stargaze-local-9 at height 1"))
        .stdout(predicate::str::contains("sg_marketplace.wasm"));
}

#[test]
fn test_deploy_missing_contract_fails() {
    let fixture = ContractsFixture::new();

    sg_e2e()
        .arg("--contracts-dir")
        .arg(fixture.dir.path())
        .arg("deploy")
        .arg("ghost.wasm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ghost.wasm"));
}

#[test]
fn test_deploy_requires_contracts() {
    sg_e2e().arg("deploy").assert().failure();
}

#[test]
fn test_deploy_rejects_zero_accounts() {
    let fixture = ContractsFixture::with_contracts(&["sg_marketplace.wasm"]);

    sg_e2e()
        .env("SG_E2E_ACCOUNT_COUNT", "0")
        .arg("--contracts-dir")
        .arg(fixture.dir.path())
        .arg("deploy")
        .arg("sg_marketplace.wasm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one account"));
}

#[test]
fn test_deploy_reads_contracts_dir_from_env() {
    let fixture = ContractsFixture::with_contracts(&["sg_marketplace.wasm"]);

    sg_e2e()
        .env("SG_E2E_CONTRACTS_DIR", fixture.dir.path())
        .arg("deploy")
        .arg("sg_marketplace.wasm")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cache: 1 loads"));
}
