//! Shared helpers for the demo binaries.

use tracing_subscriber::EnvFilter;

/// Installs a formatted tracing subscriber.
///
/// The level comes from `LOGLEVEL` (e.g. `debug`), defaulting to `info`.
pub fn setup_logger() {
    let level = std::env::var("LOGLEVEL").unwrap_or_else(|_| "info".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_target(false)
        .try_init();
}
