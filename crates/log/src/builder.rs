//! Subscriber installation

use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Format, LogConfig};
use crate::error::{LogError, LogResult};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Format layer with the options every format shares.
macro_rules! fmt_layer {
    ($config:expr) => {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi($config.colors)
            .with_target($config.target)
            .with_file($config.source)
            .with_line_number($config.source)
    };
}

/// Parses the configured level into a filter.
///
/// # Errors
///
/// Returns [`LogError::Filter`] when `config.level` is not a valid
/// directive list.
pub fn build_filter(config: &LogConfig) -> LogResult<EnvFilter> {
    EnvFilter::try_new(&config.level).map_err(|e| LogError::Filter {
        filter: config.level.clone(),
        reason: e.to_string(),
    })
}

fn build_layer(config: &LogConfig) -> BoxedLayer {
    match config.format {
        Format::Pretty => fmt_layer!(config).pretty().boxed(),
        Format::Compact => fmt_layer!(config).compact().boxed(),
        Format::Json => fmt_layer!(config)
            .json()
            .with_current_span(true)
            .flatten_event(true)
            .boxed(),
    }
}

/// Installs the global subscriber. Events go to stderr.
///
/// # Errors
///
/// Returns [`LogError::Filter`] for a bad level and [`LogError::Init`] when
/// a global subscriber is already set.
pub fn init(config: &LogConfig) -> LogResult<()> {
    let filter = build_filter(config)?;

    Registry::default()
        .with(build_layer(config))
        .with(filter)
        .try_init()
        .map_err(|e| LogError::Init(e.to_string()))?;

    tracing::debug!(level = %config.level, format = %config.format, "logger installed");
    Ok(())
}

/// Installs a subscriber configured from the environment.
///
/// # Errors
///
/// See [`init`].
pub fn init_from_env() -> LogResult<()> {
    init(&LogConfig::from_env())
}
