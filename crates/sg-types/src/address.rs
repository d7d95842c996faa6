//! Address normalization utilities.
//!
//! This module is the canonical source for address handling in the workspace.
//! Other crates should import from here rather than defining their own logic.
//!
//! The simulated chain works with raw byte addresses rendered as hex:
//! - Account addresses: 20 bytes ("0x" + 40 hex chars)
//! - Contract addresses: 32 bytes ("0x" + 64 hex chars)
//!
//! Input may come with or without the `0x` prefix and in any case; [`Addr`]
//! always stores the lowercase, prefixed form so string comparison is address
//! comparison.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Byte length of an account address.
pub const ACCOUNT_ADDRESS_LEN: usize = 20;

/// Byte length of a module-derived (contract) address.
pub const MODULE_ADDRESS_LEN: usize = 32;

/// A normalized address: lowercase hex with `0x` prefix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Addr(String);

impl Addr {
    /// Build an address from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Addr(format!("0x{}", hex::encode(bytes)))
    }

    /// Parse and normalize a hex address.
    ///
    /// Returns `None` unless the input decodes to exactly 20 or 32 bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use sg_e2e_types::Addr;
    ///
    /// let addr = Addr::parse("0XABCDEF0123456789ABCDEF0123456789ABCDEF01").unwrap();
    /// assert_eq!(addr.as_str(), "0xabcdef0123456789abcdef0123456789abcdef01");
    /// assert!(Addr::parse("0x2").is_none());
    /// ```
    pub fn parse(addr: &str) -> Option<Self> {
        let addr = addr.trim();
        let hex = addr
            .strip_prefix("0x")
            .or_else(|| addr.strip_prefix("0X"))
            .unwrap_or(addr)
            .to_lowercase();
        let bytes = hex::decode(&hex).ok()?;
        match bytes.len() {
            ACCOUNT_ADDRESS_LEN | MODULE_ADDRESS_LEN => Some(Addr(format!("0x{}", hex))),
            _ => None,
        }
    }

    /// Derive a module account address the way the Cosmos SDK does:
    /// `sha256(sha256("module") || module_name || 0x00 || key)`.
    pub fn module(module_name: &str, key: &[u8]) -> Self {
        let type_hash = Sha256::digest(b"module");
        let mut hasher = Sha256::new();
        hasher.update(type_hash);
        hasher.update(module_name.as_bytes());
        hasher.update([0u8]);
        hasher.update(key);
        Addr::from_bytes(&hasher.finalize())
    }

    /// The normalized string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode back to raw bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        // Constructors guarantee valid hex after the prefix.
        hex::decode(&self.0[2..]).unwrap_or_default()
    }

    /// Whether this is a 32-byte module-derived address.
    pub fn is_module_address(&self) -> bool {
        self.0.len() == 2 + MODULE_ADDRESS_LEN * 2
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Addr {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Addr {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Addr::parse(&value).ok_or_else(|| format!("invalid address: {}", value))
    }
}

impl From<Addr> for String {
    fn from(addr: Addr) -> Self {
        addr.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_prefix() {
        let variants = [
            "0x00112233445566778899aabbccddeeff00112233",
            "00112233445566778899AABBCCDDEEFF00112233",
            "0X00112233445566778899aabbccddeeff00112233",
            "  0x00112233445566778899aabbccddeeff00112233 ",
        ];
        for variant in &variants {
            let addr = Addr::parse(variant).expect("should parse");
            assert_eq!(addr.as_str(), "0x00112233445566778899aabbccddeeff00112233");
        }
    }

    #[test]
    fn test_parse_rejects_bad_lengths_and_hex() {
        assert!(Addr::parse("").is_none());
        assert!(Addr::parse("0x2").is_none());
        assert!(Addr::parse("Operator1").is_none());
        assert!(Addr::parse(&"zz".repeat(20)).is_none());
        assert!(Addr::parse(&"ab".repeat(21)).is_none());
        assert!(Addr::parse(&"ab".repeat(32)).is_some());
    }

    #[test]
    fn test_module_address_is_deterministic() {
        let a = Addr::module("wasm", &[0, 0, 0, 0, 0, 0, 0, 1]);
        let b = Addr::module("wasm", &[0, 0, 0, 0, 0, 0, 0, 1]);
        let c = Addr::module("wasm", &[0, 0, 0, 0, 0, 0, 0, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.is_module_address());
        assert_eq!(a.to_bytes().len(), MODULE_ADDRESS_LEN);
    }

    #[test]
    fn test_serde_uses_plain_string() {
        let addr = Addr::from_bytes(&[0xab; ACCOUNT_ADDRESS_LEN]);
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "ab".repeat(20)));

        let back: Addr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);

        let bad: Result<Addr, _> = serde_json::from_str("\"not-an-address\"");
        assert!(bad.is_err());
    }
}
