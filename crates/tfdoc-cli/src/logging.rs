//! Logging setup for the tfdoc binaries.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn,tfdoc=info";

/// Initializes the global `tracing` subscriber.
///
/// Output goes to stderr so that stdout carries only command output.
/// Set `RUST_LOG` (e.g. `RUST_LOG=tfdoc_store=debug`) to change verbosity.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
