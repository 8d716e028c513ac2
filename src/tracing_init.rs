//! Process-wide tracing initialization. Called once from main.

use tracing_subscriber::EnvFilter;

/// Structured logs to stderr, level from `RUST_LOG` (default `info`).
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
