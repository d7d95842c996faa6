//! Contract directory fixtures.

use sg_e2e::sg_contract_cache::BytecodeCache;
use sg_e2e::{E2eSuite, SuiteConfig};
use tempfile::TempDir;

/// Wasm magic and version header.
const WASM_HEADER: &[u8] = b"\0asm\x01\0\0\0";

/// A binary the simulated chain accepts, distinct per `tag`.
pub fn fake_wasm(tag: &str) -> Vec<u8> {
    [WASM_HEADER, tag.as_bytes()].concat()
}

/// A temporary contracts directory. Removed on drop.
pub struct ContractsFixture {
    pub dir: TempDir,
}

impl ContractsFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp contracts dir"),
        }
    }

    /// Fixture holding one fake binary per name.
    pub fn with_contracts(names: &[&str]) -> Self {
        let fixture = Self::new();
        for name in names {
            fixture.write(name, &fake_wasm(name));
        }
        fixture
    }

    pub fn write(&self, name: &str, bytes: &[u8]) {
        std::fs::write(self.dir.path().join(name), bytes).expect("write contract fixture");
    }

    pub fn cache(&self) -> BytecodeCache {
        BytecodeCache::from_dir(self.dir.path())
    }

    pub fn config(&self) -> SuiteConfig {
        SuiteConfig {
            account_count: 4,
            ..SuiteConfig::default()
        }
        .with_contracts_dir(self.dir.path())
    }
}

/// A ready suite over a directory holding the marketplace plus `extra`.
pub fn suite_fixture(extra: &[&str]) -> (ContractsFixture, BytecodeCache, E2eSuite) {
    let mut names = vec!["sg_marketplace.wasm"];
    names.extend_from_slice(extra);
    let fixture = ContractsFixture::with_contracts(&names);
    let cache = fixture.cache();
    let suite = E2eSuite::setup(fixture.config(), &cache).expect("suite setup");
    (fixture, cache, suite)
}
