//! Logging utilities for the Turnero application.
//!
//! Provides a standardized way to initialize the tracing subscriber across
//! the binaries in this workspace.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with the default log level (INFO).
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// Formats log messages with timestamps, log levels, targets, and file/line
/// information. Uses `try_init` so a second call (e.g. from tests) is a
/// no-op instead of a panic.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    for target in ["turnero_config", "turnero_common", "turnero_gcal", "turnero_backend"] {
        filter = filter.add_directive(
            format!("{}={}", target, level)
                .parse()
                .expect("valid directive"),
        );
    }

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
