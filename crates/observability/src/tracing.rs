//! Tracing/logging initialization.
//!
//! Logs go to stderr so they never interleave with the menu on stdout.

use tracing_subscriber::EnvFilter;

use crate::LogOptions;

const FALLBACK_LEVEL: &str = "warn";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(options: &LogOptions) {
    let filter = build_filter(
        std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        &options.default_level,
    );

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if options.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}

/// `RUST_LOG` wins when it parses; then the configured level; then `warn`.
fn build_filter(env_directive: Option<&str>, default_level: &str) -> EnvFilter {
    env_directive
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_new(default_level).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_LEVEL))
}
