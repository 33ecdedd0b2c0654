//! Tracing/logging setup shared by the binaries.

/// Tracing configuration (filters, layers).
pub mod tracing;

/// Logging options resolved from configuration and command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    /// Filter directive used when `RUST_LOG` is unset or invalid.
    pub default_level: String,
    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            default_level: "warn".to_string(),
            json: false,
        }
    }
}

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(options: &LogOptions) {
    tracing::init(options);
}
