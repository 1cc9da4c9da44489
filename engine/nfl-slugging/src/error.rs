//! Error types for the slugging pipeline

use thiserror::Error;

/// Result type for slugging pipeline operations
pub type Result<T> = std::result::Result<T, SluggingError>;

/// Errors that can occur while building a weekly slugging report
#[derive(Error, Debug)]
pub enum SluggingError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Team {team} has no derived metrics (plays = {plays})")]
    MissingMetric { team: String, plays: u32 },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Errors raised while talking to the stats provider
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: reqwest::StatusCode },
}

impl SluggingError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        SluggingError::MalformedResponse(reason.into())
    }
}
