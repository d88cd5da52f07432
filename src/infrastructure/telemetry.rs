//! Tracing subscriber setup

use crate::error::{PurpleLineError, Result};
use crate::infrastructure::config::{LogFormat, LoggingConfig};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter,
};

/// Install the global subscriber. Logs go to stderr so rendered HTML on stdout stays clean.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(logging: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(parse_level(&logging.level)?.into())
        .from_env_lossy();

    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_target(true)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| {
            PurpleLineError::Telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}

/// Parse a level name (trace|debug|info|warn|error|off)
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    level.trim().parse::<LevelFilter>().map_err(|err| {
        PurpleLineError::Config(format!("Invalid logging.level '{}': {}", level, err))
    })
}
