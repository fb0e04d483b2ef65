//! Tracing initialization and subscriber setup.
//!
//! This module configures the global tracing subscriber: an `EnvFilter` built
//! from the page configuration and a fmt layer writing through
//! [`ConsoleMakeWriter`].

use super::console_writer::ConsoleMakeWriter;
use crate::Config;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set and a valid `EnvFilter` directive
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Output has no timestamps (the console adds its own) and no ANSI colors
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use shelfview::observability::init_tracing;
/// use shelfview::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();
}
