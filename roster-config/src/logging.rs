//! Tracing subscriber setup.

use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::{ConfigLoadError, LoggingConfig};

/// Build the filter: `RUST_LOG` wins, the configured filter is the fallback.
pub fn env_filter(
    config: &LoggingConfig,
) -> Result<EnvFilter, ConfigLoadError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.filter).map_err(|err| {
        ConfigLoadError::InvalidLogFilter {
            filter: config.filter.clone(),
            message: err.to_string(),
        }
    })
}

/// Install the global subscriber. Logs go to stderr so stdout stays free for
/// ordered rows.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigLoadError> {
    tracing_subscriber::registry()
        .with(env_filter(config)?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|err| ConfigLoadError::LoggingInit(err.to_string()))
}
