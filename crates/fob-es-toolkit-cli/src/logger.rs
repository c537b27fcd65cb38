//! Logging setup using the `tracing` ecosystem.
//!
//! The verbosity is determined in this order:
//! 1. `--verbose` flag: DEBUG for the fob crates
//! 2. `--quiet` flag: ERROR only
//! 3. `RUST_LOG` environment variable
//! 4. Default: WARN, so unsupported-function warnings from the plugin show up

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Call once at the start of the program, before any logging occurs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("fob_plugin_es_toolkit=debug,fob_es_toolkit_cli=debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("fob_plugin_es_toolkit=warn,fob_es_toolkit_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false) // Don't show the module path (keeps output clean)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    // try_init: integration tests may run the entry point more than once
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
