// src/logging.rs
//! Subscriber setup for the binary and demos
//!
//! Library code only emits `tracing` events. Installing a subscriber is left
//! to the executable, which calls [`init_logging`] once at startup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

/// Build the event filter: `RUST_LOG` wins over the configured level
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// Install a global fmt subscriber writing to stderr
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_logging(config: &LoggingConfig) {
    let subscriber = tracing_subscriber::registry().with(build_filter(config)).with(
        fmt::layer()
            .with_ansi(config.ansi)
            .with_target(false)
            .with_writer(std::io::stderr),
    );

    // Ignore error if subscriber was already set
    let _ = tracing::subscriber::set_global_default(subscriber);
}
