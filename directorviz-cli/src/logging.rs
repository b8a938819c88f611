use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Verbosity follows `RUST_LOG` and defaults
/// to `info`; output goes to stderr so terminal charts on stdout stay clean.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}
