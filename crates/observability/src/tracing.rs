//! Tracing/logging initialization.
//!
//! Catalog operations emit `debug!` events naming themselves; whether they
//! appear is decided here (and by `RUST_LOG`), not by a global flag in the
//! catalog. Set `RUST_LOG=stockroom_catalog=debug` to see every operation.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
