//! Bytecode sources consulted on a cache miss.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use crate::errors::LoadError;
use crate::paths::contract_path;

/// Trait for places contract bytecode can be read from.
///
/// The cache calls [`ContractSource::load`] at most once per identifier, with
/// its lock held, so implementations need no coordination of their own.
pub trait ContractSource: Send + Sync {
    /// Read the full binary for `contract`.
    fn load(&self, contract: &str) -> Result<Vec<u8>, LoadError>;

    /// Human-readable description for logs and reports.
    fn describe(&self) -> String {
        "custom contract source".to_string()
    }
}

/// Reads `<root>/<contract>` from the local filesystem.
#[derive(Debug, Clone)]
pub struct FsContractSource {
    root: Arc<Path>,
}

impl FsContractSource {
    /// Create a source over a contract binary directory.
    ///
    /// The directory is not required to exist yet; missing files surface as
    /// [`LoadError::NotFound`] at load time.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: Arc::from(root.as_ref()),
        }
    }

    /// The contract binary directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContractSource for FsContractSource {
    fn load(&self, contract: &str) -> Result<Vec<u8>, LoadError> {
        let path = contract_path(&self.root, contract);
        std::fs::read(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                LoadError::NotFound {
                    contract: contract.to_string(),
                    path,
                }
            } else {
                LoadError::Io {
                    contract: contract.to_string(),
                    path,
                    source,
                }
            }
        })
    }

    fn describe(&self) -> String {
        format!("filesystem:{}", self.root.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_reads_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.wasm"), b"\0asm\x01\0\0\0").unwrap();

        let source = FsContractSource::new(temp_dir.path());
        let bytes = source.load("a.wasm").unwrap();
        assert_eq!(bytes, b"\0asm\x01\0\0\0");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let source = FsContractSource::new(temp_dir.path());

        let err = source.load("missing.wasm").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.contract(), "missing.wasm");
        assert!(err.to_string().contains("missing.wasm"));
    }

    #[test]
    fn test_directory_in_place_of_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("dir.wasm")).unwrap();
        let source = FsContractSource::new(temp_dir.path());

        let err = source.load("dir.wasm").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }), "got {:?}", err);
    }

    #[test]
    fn test_describe_names_root() {
        let source = FsContractSource::new("contracts");
        assert_eq!(source.describe(), "filesystem:contracts");
        assert_eq!(source.root(), Path::new("contracts"));
    }
}
