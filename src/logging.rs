//! Tracing subscriber setup. Logs go to stderr; stdout carries the report.

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins when set; otherwise `debug` with `--verbose`, else `warn`.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // a subscriber may already be installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
