//! Wasm module parameters and limits.

use serde::{Deserialize, Serialize};

use crate::msg::AccessConfig;

/// Largest accepted bytecode upload.
pub const MAX_WASM_SIZE: usize = 800 * 1024;

/// Longest accepted contract label, in bytes.
pub const MAX_LABEL_SIZE: usize = 128;

/// Leading bytes of every Wasm module.
pub const WASM_MAGIC: &[u8; 4] = b"\0asm";

/// Governance-controlled access rules of the wasm module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasmParams {
    pub code_upload_access: AccessConfig,
    /// Applied to uploads that do not set their own instantiate permission.
    pub instantiate_default_permission: AccessConfig,
}

impl Default for WasmParams {
    /// A permissioned chain: nobody uploads until governance opens it,
    /// anybody may instantiate what has been uploaded.
    fn default() -> Self {
        Self {
            code_upload_access: AccessConfig::Nobody,
            instantiate_default_permission: AccessConfig::Everybody,
        }
    }
}

impl WasmParams {
    /// Upload and instantiate open to everyone.
    pub fn permissionless() -> Self {
        Self {
            code_upload_access: AccessConfig::Everybody,
            instantiate_default_permission: AccessConfig::Everybody,
        }
    }
}
