//! Metrics and reporting for cache operations.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Cache operation metrics (thread-safe counters).
///
/// Clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct CacheMetrics {
    /// Lookups served from memory
    pub hits: Arc<AtomicU64>,
    /// Successful reads from the contract source
    pub loads: Arc<AtomicU64>,
    /// Failed reads from the contract source
    pub load_failures: Arc<AtomicU64>,
    /// Bytes read from the contract source
    pub bytes_loaded: Arc<AtomicU64>,
}

impl CacheMetrics {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_load(&self, bytes: usize) {
        self.loads.fetch_add(1, Ordering::Relaxed);
        self.bytes_loaded.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    pub fn record_load_failure(&self) {
        self.load_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a snapshot of current metrics.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            loads: self.loads.load(Ordering::Relaxed),
            load_failures: self.load_failures.load(Ordering::Relaxed),
            bytes_loaded: self.bytes_loaded.load(Ordering::Relaxed),
        }
    }
}

/// Snapshot of metrics (for reporting).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub hits: u64,
    pub loads: u64,
    pub load_failures: u64,
    pub bytes_loaded: u64,
}

impl MetricsSnapshot {
    /// Total lookups observed (hits + loads + failures).
    pub fn lookups(&self) -> u64 {
        self.hits + self.loads + self.load_failures
    }

    /// Fraction of lookups served from memory, 0.0 when nothing was looked up.
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            n => self.hits as f64 / n as f64,
        }
    }
}
