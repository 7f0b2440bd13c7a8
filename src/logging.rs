//! Diagnostic logging setup
//!
//! Installs a `tracing-subscriber` fmt layer writing to stderr. `RUST_LOG`
//! wins over the configured level.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Settings;

/// Build the filter from `RUST_LOG`, falling back to the settings level
pub fn build_filter(settings: &Settings, verbose: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if verbose { "debug" } else { settings.log_level.as_str() };
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber; a second call is a no-op
pub fn init(settings: &Settings, verbose: bool) {
    tracing_subscriber::registry()
        .with(build_filter(settings, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .ok();
}
