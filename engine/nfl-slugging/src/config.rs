//! Layered configuration: built-in defaults, an optional TOML file, then
//! `SLUGGING_*` environment variables.

use config::{Config, Environment, File};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SluggingError};
use crate::query::{QueryBuilder, DEFAULT_BASE_URL};

/// Season queried when nothing else is configured
pub const DEFAULT_SEASON: u32 = 2021;

/// HTTP timeout for each play finder request
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SluggingConfig {
    /// Play finder settings
    pub stathead: StatheadConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatheadConfig {
    /// Play finder endpoint, without a query string
    pub base_url: String,

    /// Season year used for both `year_min` and `year_max`
    pub season: u32,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (compact, pretty, json)
    pub format: String,
}

impl Default for StatheadConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            season: DEFAULT_SEASON,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "compact".to_string() }
    }
}

impl SluggingConfig {
    /// Load configuration, reading `path` if given.
    ///
    /// Environment variables override the file, e.g. `SLUGGING_STATHEAD__SEASON=2022`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            tracing::debug!("Loading configuration from file: {:?}", path);
            builder = builder.add_source(File::from(path).required(true));
        }

        let config: SluggingConfig = builder
            .add_source(
                Environment::with_prefix("SLUGGING")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.stathead.parsed_base_url()?;

        if self.stathead.request_timeout_secs == 0 {
            return Err(SluggingError::InvalidConfig(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(SluggingError::InvalidConfig(format!("Invalid log level: {other}"))),
        }

        match self.logging.format.as_str() {
            "compact" | "pretty" | "json" => {}
            other => {
                return Err(SluggingError::InvalidConfig(format!("Invalid log format: {other}")))
            }
        }

        Ok(())
    }

    /// Query builder for the configured endpoint and season
    pub fn query_builder(&self) -> Result<QueryBuilder> {
        Ok(QueryBuilder::new(self.stathead.parsed_base_url()?, self.stathead.season))
    }
}

impl StatheadConfig {
    pub fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            SluggingError::InvalidConfig(format!("Invalid base_url '{}': {e}", self.base_url))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(SluggingError::InvalidConfig(format!(
                "base_url must be http or https, got '{}'",
                self.base_url
            )));
        }

        Ok(url)
    }
}
