use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{error, info};

use crate::config::StatheadConfig;
use crate::error::{FetchError, Result, SluggingError};
use crate::table;
use crate::types::TeamPlaysRow;

/// Anything that can turn a play finder query into its team summary rows
#[async_trait]
pub trait TableSource: Send + Sync {
    async fn fetch_team_plays(&self, url: &Url) -> Result<Vec<TeamPlaysRow>>;
}

/// Stathead play finder scraper
pub struct PlayFinderScraper {
    client: Client,
}

impl PlayFinderScraper {
    /// Create a new scraper with the configured timeout and user agent
    pub fn new(config: &StatheadConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| SluggingError::InvalidConfig(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Fetch a results page and return its body
    pub async fn fetch_page(&self, url: &Url) -> Result<String> {
        info!("Fetching data from: {}", url);

        let response = self.client.get(url.clone()).send().await.map_err(|source| {
            FetchError::Transport { url: url.to_string(), source }
        })?;

        if !response.status().is_success() {
            return Err(FetchError::Status { url: url.to_string(), status: response.status() }.into());
        }

        let html = response
            .text()
            .await
            .map_err(|source| FetchError::Transport { url: url.to_string(), source })?;

        info!("Successfully fetched HTML ({} bytes)", html.len());
        Ok(html)
    }
}

#[async_trait]
impl TableSource for PlayFinderScraper {
    async fn fetch_team_plays(&self, url: &Url) -> Result<Vec<TeamPlaysRow>> {
        let html = self.fetch_page(url).await?;

        let rows = table::extract_team_plays(&html).map_err(|e| {
            error!("Unexpected page layout from {}: {}", url, e);
            e
        })?;

        info!("Parsed {} team rows", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SluggingConfig;

    #[test]
    fn test_scraper_builds_from_default_config() {
        let config = SluggingConfig::default();
        assert!(PlayFinderScraper::new(&config.stathead).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_fetch_error() {
        let mut config = SluggingConfig::default();
        config.stathead.request_timeout_secs = 2;
        let scraper = PlayFinderScraper::new(&config.stathead).unwrap();

        // Port 9 on loopback refuses connections.
        let url = Url::parse("http://127.0.0.1:9/football/play_finder.cgi").unwrap();
        let err = scraper.fetch_team_plays(&url).await.unwrap_err();
        match err {
            SluggingError::Fetch(FetchError::Transport { url: failed, .. }) => {
                assert_eq!(failed, url.to_string());
            }
            other => panic!("expected transport error, got {other:?}"),
        }
    }
}
