//! Tracing subscriber bootstrap for binaries.

use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber. `RUST_LOG` overrides the default level.
pub fn init(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
