//! Logging setup for the CLI.
//!
//! Structured logging via the `tracing` ecosystem. Log lines go to stderr;
//! stdout is reserved for the generated document. `--no-color` strips the
//! ANSI styling for piped or logged stderr.
//!
//! # Verbosity Levels
//!
//! 1. `--verbose` flag: debug level for the rig crates
//! 2. `--quiet` flag: errors only
//! 3. `RUST_LOG` environment variable: custom filter
//! 4. Default: info level for the rig crates

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("rig_config=debug,rig_cli=debug")
    } else if quiet {
        EnvFilter::new("rig_config=error,rig_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rig_config=info,rig_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
