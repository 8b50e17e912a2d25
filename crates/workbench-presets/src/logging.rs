//! Logging initialization for the `wbp` binary.
//!
//! Configures the `tracing` subscriber with level filtering via the `WBP_LOG`
//! environment variable, falling back to the configured level. Records from
//! the `log` facade used by `layout-presets` are bridged into tracing.
//!
//! # Usage
//!
//! ```bash
//! # Configured level (default warn)
//! wbp list
//!
//! # Debug level
//! WBP_LOG=debug wbp apply
//!
//! # Module-specific filtering
//! WBP_LOG=layout_presets=debug,warn wbp save
//! ```

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "WBP_LOG";

/// Build the filter from `WBP_LOG`, or `default_level` when unset or invalid.
pub fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize the tracing subscriber.
///
/// Output goes to stderr so stdout stays reserved for prompts, messages and
/// emitted workbench commands.
///
/// # Panics
///
/// Panics if a global subscriber has already been set (should only be
/// called once, at startup).
pub fn init(default_level: &str) {
    fmt()
        .with_env_filter(filter(default_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
