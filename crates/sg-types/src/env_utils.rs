//! Environment variable parsing utilities.
//!
//! Suite configuration is read from `SG_E2E_*` variables. These helpers keep
//! the "parse or fall back" pattern in one place:
//!
//! ```
//! use sg_e2e_types::env_utils::{env_var, env_var_or};
//!
//! let accounts: usize = env_var_or("SG_E2E_DOC_ACCOUNTS", 10);
//! assert_eq!(accounts, 10);
//!
//! let missing: Option<u64> = env_var("SG_E2E_DOC_MISSING");
//! assert!(missing.is_none());
//! ```

use std::path::PathBuf;
use std::str::FromStr;

/// Parse an environment variable into a type that implements `FromStr`.
///
/// Returns `None` if the variable is unset, empty, or does not parse.
pub fn env_var<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| v.trim().parse().ok())
}

/// Parse an environment variable, falling back to `default`.
pub fn env_var_or<T: FromStr>(key: &str, default: T) -> T {
    env_var(key).unwrap_or(default)
}

/// Read a string variable, falling back to `default` when unset or empty.
pub fn env_string_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Read a path variable, falling back to `default` when unset or empty.
pub fn env_path_or(key: &str, default: &str) -> PathBuf {
    PathBuf::from(env_string_or(key, default))
}

/// Truthy check: "1", "true", "yes", "on" (case-insensitive).
pub fn env_bool_or(key: &str, default: bool) -> bool {
    match std::env::var(key).ok() {
        Some(v) => matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        None => default,
    }
}
