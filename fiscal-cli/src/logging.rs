//! Logging bootstrap for the CLI.

use tracing_subscriber::EnvFilter;

/// Initializes tracing once at startup: INFO by default, overridden by
/// the RUST_LOG env var. Output goes to stderr so report text on stdout
/// stays pipeable.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
