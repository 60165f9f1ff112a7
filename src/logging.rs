//! Logging initialization for the `cfgaccess` binary.
//!
//! Logs go to stderr so stdout carries only the requested value.
//! `CFGACCESS_LOG` overrides the verbosity passed on the command line.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "CFGACCESS_LOG";

/// Maps `-v` occurrences to a tracing directive.
pub const fn verbosity_to_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_to_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity >= 2)
        .with_writer(std::io::stderr)
        .try_init();
}
