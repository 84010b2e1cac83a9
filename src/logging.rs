//! Tracing setup

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr so stdout stays the summary.
///
/// `RUST_LOG` takes precedence over the level derived from `--verbose`.
pub fn init(verbose: bool, ansi: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(ansi)
        .try_init();
}
