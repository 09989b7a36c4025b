#![forbid(unsafe_code)]

//! Structured logging support.
//!
//! With the `tracing` feature the `tracing` macros are re-exported here so
//! downstream crates log through one path. With `tracing-json` a JSON
//! subscriber can be installed for production hosts.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Environment variable read by [`init_json_logging`] for the filter.
pub const LOG_ENV_VAR: &str = "MARQUEE_LOG";

/// Install a global JSON subscriber filtered by `MARQUEE_LOG` (default `info`).
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
