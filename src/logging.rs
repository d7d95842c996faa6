//! Tracing subscriber setup for the CLI and for tests that want log output.

use sg_e2e_types::env_utils::env_bool_or;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "sg_e2e=info,sg_e2e_core=info,sg_contract_cache=info";

/// Install a global fmt subscriber.
///
/// Honours `RUST_LOG`, falling back to `default_filter`. `SG_E2E_LOG_JSON=1`
/// switches to JSON lines. Returns `false` if a subscriber was already set,
/// so calling this more than once is harmless.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if env_bool_or("SG_E2E_LOG_JSON", false) {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
