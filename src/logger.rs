// src/logger.rs
// =============================================================================
// Installs the tracing subscriber for the binary.
//
// Log lines go to stderr so stdout stays clean for the report (and for
// --json). RUST_LOG always wins; without it, --verbose shows per-link debug
// events and a normal run only shows errors.
// =============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "link_sentinel=debug,warn"
    } else {
        "link_sentinel=error"
    }
}

pub fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
