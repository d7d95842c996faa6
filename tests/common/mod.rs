#![allow(dead_code, unused_imports)]
//! Shared test utilities for integration tests.
//!
//! # Modules
//!
//! - `fixtures`: temporary contract directories with wasm-shaped binaries
//! - `assertions`: assertion helpers with better failure messages

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_error_contains, assert_ok};
pub use fixtures::{fake_wasm, suite_fixture, ContractsFixture};
