use std::path::PathBuf;
use thiserror::Error;

/// Contract bytecode could not be loaded from its source.
///
/// Nothing is cached when this is returned, so the same key may be retried.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("contract {contract} not found at {}", path.display())]
    NotFound { contract: String, path: PathBuf },

    #[error("failed to read contract {contract} from {}: {source}", path.display())]
    Io {
        contract: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("contract source failed for {contract}: {reason}")]
    Source { contract: String, reason: String },
}

impl LoadError {
    /// The contract identifier the failed load was for.
    pub fn contract(&self) -> &str {
        match self {
            LoadError::NotFound { contract, .. }
            | LoadError::Io { contract, .. }
            | LoadError::Source { contract, .. } => contract,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::NotFound { .. })
    }
}
