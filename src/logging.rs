//! Log subscriber setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! process entry point's job.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `runic=debug`.
pub const LOG_ENV: &str = "RUNIC_LOG";

/// Filter directive for a `-v` count, falling back to `configured` when quiet.
pub fn level_for(verbosity: u8, configured: &str) -> String {
    match verbosity {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Installs a stderr fmt subscriber. `RUNIC_LOG` wins over `default_level`.
pub fn init(default_level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
