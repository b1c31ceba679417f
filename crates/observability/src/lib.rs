//! Tracing/logging setup shared by payguard binaries.

use tracing_subscriber::EnvFilter;

/// Initialize process-wide tracing.
///
/// Filtering is driven by `RUST_LOG` (default `info`). Output is compact
/// human-readable lines so logs coexist with rendered dashboard output.
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(false)
        .try_init();
}
