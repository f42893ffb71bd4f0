//! Debug tracing setup for development diagnostics
//!
//! Provides structured logging for debugging selection, scrolling, and
//! dispatch behavior.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=entrybox=trace` - everything this crate emits
//! - `RUST_LOG=entrybox::entry=debug` - module-level filtering

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the tracing subscriber with console logging.
///
/// Console output respects the RUST_LOG env var for filtering and
/// defaults to `warn`. Call once at host startup; library code only
/// emits events and never installs a subscriber on its own.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    tracing_subscriber::registry().with(console_layer).init();
}
