//! Logging setup for ecoquestctl
//!
//! Diagnostics go to stderr so command output on stdout stays clean.
//! Filter priority:
//! 1. $ECOQUEST_LOG (tracing EnvFilter syntax)
//! 2. `[logging] level` from the config file
//! 3. "info"

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "ECOQUEST_LOG";

/// Pick the filter: env var first, then the configured directive
pub fn build_filter(config_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(config_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(config_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
