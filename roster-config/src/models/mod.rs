//! Configuration model and loading.

use anyhow::{Context, anyhow};
use roster_core::OrderingSettings;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing_subscriber::EnvFilter;

use crate::ConfigLoadError;

/// Environment variable naming a TOML or JSON config file.
pub const CONFIG_PATH_ENV: &str = "ROSTER_CONFIG_PATH";

/// Environment variable holding an inline JSON config.
pub const CONFIG_JSON_ENV: &str = "ROSTER_CONFIG_JSON";

/// File picked up from the working directory when no variable is set.
pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";

/// Source that produced the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Nothing found; built-in defaults.
    #[default]
    Default,
    /// File named by `ROSTER_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// Inline JSON from `ROSTER_CONFIG_JSON`.
    EnvInline,
    /// Explicit file, or `roster.toml` in the working directory.
    File(PathBuf),
}

/// Logging settings. `RUST_LOG`, when set, overrides `filter`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `info` or
    /// `roster_core=debug`.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Top-level settings for the roster tools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Default ordering mode and shuffle seed.
    pub ordering: OrderingSettings,
    /// Log filter used when `RUST_LOG` is unset.
    pub logging: LoggingConfig,
}

impl RosterConfig {
    /// Load configuration overrides using environment variables.
    /// Evaluation order:
    /// 1) `$ROSTER_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$ROSTER_CONFIG_JSON` (inline JSON),
    /// 3) `roster.toml` in the working directory,
    /// 4) defaults if none of these exist.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        if let Ok(path_str) = env::var(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            let config = Self::load_from_file(&local)?;
            return Ok((config, ConfigSource::File(local)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    /// Read a config file, choosing the parser by extension.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read roster config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid roster config {}", path.display())
            }),
            Some("toml") | Some("tml") => Self::parse_toml(&contents)
                .map_err(|err| {
                    anyhow!("invalid roster config {}: {}", path.display(), err)
                }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// Parse a JSON document.
    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse a TOML document.
    pub fn parse_toml(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Try JSON first, then TOML, for files without a telling extension.
    pub fn parse_from_str(raw: &str, origin: &str) -> anyhow::Result<Self> {
        Self::parse_json(raw).or_else(|json_err| {
            Self::parse_toml(raw).map_err(|toml_err| {
                anyhow!(
                    "invalid roster config {origin}: not JSON ({json_err}) \
                     and not TOML ({toml_err})"
                )
            })
        })
    }

    /// Reject values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        EnvFilter::try_new(&self.logging.filter).map_err(|err| {
            ConfigLoadError::InvalidLogFilter {
                filter: self.logging.filter.clone(),
                message: err.to_string(),
            }
        })?;
        Ok(())
    }
}
