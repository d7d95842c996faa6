//! Path utilities for the contract binary directory.

use std::path::{Path, PathBuf};

/// Directory contract binaries are read from when no other root is given,
/// relative to the working directory of the test process.
pub const DEFAULT_CONTRACTS_DIR: &str = "contracts";

/// Full filesystem path for a contract binary.
///
/// The identifier is joined verbatim; it is expected to be a plain file name
/// such as `sg_marketplace.wasm`.
pub fn contract_path(root: &Path, contract: &str) -> PathBuf {
    root.join(contract)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_path_joins_file_name() {
        let path = contract_path(Path::new(DEFAULT_CONTRACTS_DIR), "sg721_base.wasm");
        assert_eq!(path, PathBuf::from("contracts/sg721_base.wasm"));
    }
}
