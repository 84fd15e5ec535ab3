use crate::constants::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr, filtered by `RUST_LOG`
/// (default `warn`); `silent` discards them so a full-screen UI stays intact.
pub fn init(silent: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    let result = if silent {
        builder.with_writer(std::io::sink).try_init()
    } else {
        builder.with_writer(std::io::stderr).try_init()
    };
    // Already installed (tests); keep the existing one.
    let _ = result;
}
