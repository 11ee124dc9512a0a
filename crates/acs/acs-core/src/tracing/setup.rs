//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the ACS tracing/logging system.
///
/// Reads the `ACS_LOG` environment variable for per-subsystem log levels.
/// Format: `ACS_LOG=acs::selection=debug,acs::pe=trace`
///
/// Falls back to `acs=info` if `ACS_LOG` is not set or is invalid.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("ACS_LOG")
            .unwrap_or_else(|_| EnvFilter::new("acs=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
