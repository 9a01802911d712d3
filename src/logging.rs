//! Diagnostic logging setup for the CLI.

use tracing_subscriber::{fmt, EnvFilter};

/// Installs a stderr subscriber.
///
/// `verbosity` counts `-v` flags: 0 is warnings only, 1 info, 2 or more
/// debug. `RUST_LOG`, when set, takes precedence. Calling this twice is
/// harmless.
pub fn init(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sightspeak={default_level}")));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init();
}
