//! Logging setup.
//!
//! Engine and driver emit `tracing` events; this module installs the
//! subscriber that prints them. Output goes to stderr so it never
//! interleaves with rendered traces on stdout.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Map a `-v` count to a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level comes from `verbosity`.
/// Only the first call has an effect.
pub fn setup_logger(verbosity: u8) {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

        // Another subscriber may already be installed (tests, embedding apps).
        let _ = tracing_subscriber::fmt()
            .compact()
            .with_target(false)
            .with_thread_names(false)
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter)
            .try_init();
    });
}
