//! Logging Infrastructure
//!
//! Console logging for hosts embedding the client. `RUST_LOG` overrides the
//! level passed in.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Initialize the global subscriber
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "ev_client=trace")
/// * `json_format` - JSON lines (production) instead of human-readable output
///
/// Fails if a global subscriber is already installed.
///
/// # Examples
/// ```no_run
/// ev_client::logger::init_logger("debug", false).ok();
/// ```
pub fn init_logger(level: &str, json_format: bool) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry();

    if json_format {
        let console_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter);
        subscriber.with(console_layer).try_init()
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter);
        subscriber.with(console_layer).try_init()
    }
}
