//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events: `debug` when a run starts or an
//! exception handler takes over, `trace` per stage, `warn` when a run is
//! aborted by a configuration error. Binaries and tests call one of these
//! helpers to see them.

use tracing_subscriber::EnvFilter;

/// Installs a human-readable subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Returns false if a
/// global subscriber was already installed.
pub fn init_tracing(default_filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Installs a JSON subscriber, one object per event.
///
/// Returns false if a global subscriber was already installed.
pub fn init_json_tracing(default_filter: &str) -> bool {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter(default_filter))
        .try_init()
        .is_ok()
}

fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}
