//! The bytecode cache.
//!
//! Contract binaries are read from a [`ContractSource`] the first time they are
//! asked for and served from memory afterwards. Entries are write-once: there is
//! no invalidation and no eviction, the cache lives as long as its owner.
//!
//! # Locking
//!
//! A single [`parking_lot::Mutex`] guards the map for every read and write.
//! `get` takes it twice:
//!
//! 1. Fast path: lock, look up, unlock.
//! 2. Miss path: lock again and hold it for the rest of the call. The map is
//!    re-checked before touching the source, because another caller may have
//!    loaded the key between the two acquisitions.
//!
//! Holding the lock across the source read serializes loads, which is what makes
//! the source read happen at most once per key.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use tracing::{debug, trace, warn};

use crate::errors::LoadError;
use crate::metrics::CacheMetrics;
use crate::paths::DEFAULT_CONTRACTS_DIR;
use crate::source::{ContractSource, FsContractSource};

static GLOBAL_CACHE: OnceLock<BytecodeCache> = OnceLock::new();

/// Load-once, in-memory cache of contract binaries keyed by identifier.
pub struct BytecodeCache {
    source: Box<dyn ContractSource>,
    contracts: Mutex<HashMap<String, Arc<[u8]>>>,
    metrics: CacheMetrics,
}

impl BytecodeCache {
    /// Create a cache over an arbitrary source.
    pub fn new<S: ContractSource + 'static>(source: S) -> Self {
        Self {
            source: Box::new(source),
            contracts: Mutex::new(HashMap::new()),
            metrics: CacheMetrics::default(),
        }
    }

    /// Create a cache that reads `<dir>/<contract>` from disk.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(FsContractSource::new(dir))
    }

    /// The process-wide cache over [`DEFAULT_CONTRACTS_DIR`].
    ///
    /// Built on first use and never torn down. Prefer constructing a cache and
    /// passing it by reference; this exists for call sites that have no
    /// natural owner to thread one through.
    pub fn global() -> &'static BytecodeCache {
        GLOBAL_CACHE.get_or_init(|| BytecodeCache::from_dir(DEFAULT_CONTRACTS_DIR))
    }

    /// Get the bytecode for `contract`, reading it from the source on first use.
    ///
    /// Concurrent first-time callers for the same key block on the lock; exactly
    /// one of them reads the source and the rest get its result. A failed read
    /// stores nothing, so a later call retries.
    pub fn get(&self, contract: &str) -> Result<Arc<[u8]>, LoadError> {
        if let Some(bytes) = self.contracts.lock().get(contract) {
            trace!(contract, "bytecode cache hit");
            self.metrics.record_hit();
            return Ok(Arc::clone(bytes));
        }

        let mut contracts = self.contracts.lock();
        // Another caller may have loaded it after we released the fast-path lock.
        if let Some(bytes) = contracts.get(contract) {
            trace!(contract, "bytecode cache hit after contention");
            self.metrics.record_hit();
            return Ok(Arc::clone(bytes));
        }

        let bytes: Arc<[u8]> = match self.source.load(contract) {
            Ok(bytes) => bytes.into(),
            Err(e) => {
                warn!(contract, error = %e, "failed to load contract bytecode");
                self.metrics.record_load_failure();
                return Err(e);
            }
        };
        debug!(
            contract,
            size = bytes.len(),
            source = %self.source.describe(),
            "loaded contract bytecode"
        );
        self.metrics.record_load(bytes.len());
        contracts.insert(contract.to_string(), Arc::clone(&bytes));
        Ok(bytes)
    }

    /// Whether `contract` has already been loaded. Never touches the source.
    pub fn contains(&self, contract: &str) -> bool {
        self.contracts.lock().contains_key(contract)
    }

    /// Number of loaded contracts.
    pub fn len(&self) -> usize {
        self.contracts.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.contracts.lock().is_empty()
    }

    /// Loaded identifiers, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.contracts.lock().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }
}

impl std::fmt::Debug for BytecodeCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BytecodeCache")
            .field("source", &self.source.describe())
            .field("contracts", &self.keys())
            .finish()
    }
}
