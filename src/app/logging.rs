//! Diagnostic logging for the command-line front end.

use tracing::Level;

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
