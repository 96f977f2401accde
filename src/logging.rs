//! Tracing subscriber setup for the CLI.
//!
//! Logs go to stderr so they never mix with text written to stdout.
//! Filter with `PASTEFIX_LOG`, e.g. `PASTEFIX_LOG=pastefix::fixer=debug`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PASTEFIX_LOG";

/// Initialize the global subscriber.
///
/// `verbose` forces debug output for this crate; otherwise `PASTEFIX_LOG`
/// is used, falling back to `warn`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("pastefix=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
