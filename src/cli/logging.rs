//! Diagnostic logging setup for the binary

use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber.
///
/// With `verbose`, engine and round diagnostics are shown. Otherwise
/// `RUST_LOG` is honoured, falling back to warnings only. Calling this
/// twice is harmless.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("noughts=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
