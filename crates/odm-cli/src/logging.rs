//! # Tracing Setup
//!
//! `RUST_LOG` wins when set. Otherwise the level comes from the number of
//! `-v` flags: warn, info, debug, trace.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a given verbosity count.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Logs go to stderr so they never mix with
/// the per-file report on stdout.
pub fn init(verbose: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
