use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or debug
/// output for this crate when `verbose` is on. Logs go to stderr so command
/// output on stdout stays clean.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "warn,mspcat=debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}
