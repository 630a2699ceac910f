//! HTTP client for the backend news and analysis endpoints.

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::state::Headline;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request body for the analyze endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub portfolio: Vec<String>,
    #[serde(rename = "filteredNews")]
    pub filtered_news: Vec<String>,
}

/// Response body of the analyze endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

/// Builder for creating an API client.
pub struct ApiClientBuilder {
    config: ApiConfig,
}

impl ApiClientBuilder {
    /// Create a new builder with default config.
    pub fn new() -> Self {
        Self {
            config: ApiConfig::default(),
        }
    }

    /// Set the API configuration.
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the API client.
    pub fn build(self) -> Result<ApiClient> {
        ApiClient::new(self.config)
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// High-level client for the backend collaborators.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, http })
    }

    /// Fetch the general market-news feed.
    ///
    /// A response without a usable headline list yields an empty feed;
    /// transport failures and non-success statuses are fetch errors.
    pub async fn fetch_news(&self) -> Result<Vec<Headline>> {
        let url = self.endpoint("/api/news");
        tracing::debug!(%url, "fetching news feed");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::fetch(format!(
                "news endpoint returned {}",
                response.status()
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::fetch(e.to_string()))?;

        Ok(super::DataConverter::convert_feed(&body))
    }

    /// Submit the watchlist and matched headline titles for analysis.
    ///
    /// Fails fast with a validation error, before any network call, when
    /// the watchlist is empty.
    pub async fn analyze(&self, portfolio: &[String], filtered_news: &[String]) -> Result<String> {
        if portfolio.is_empty() {
            return Err(Error::invalid_input("watchlist is empty"));
        }

        let url = self.endpoint("/api/analyze");
        tracing::debug!(%url, symbols = portfolio.len(), "requesting analysis");

        let request = AnalyzeRequest {
            portfolio: portfolio.to_vec(),
            filtered_news: filtered_news.to_vec(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::analysis(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::analysis(format!(
                "analyze endpoint returned {}",
                response.status()
            )));
        }

        let body: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| Error::analysis(e.to_string()))?;

        Ok(body.analysis)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_empty_watchlist_fails_locally() {
        let client = ApiClientBuilder::new().build().unwrap();

        let result = tokio_test::block_on(client.analyze(&[], &[]));

        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_analyze_request_wire_format() {
        let request = AnalyzeRequest {
            portfolio: vec!["TCS".to_string()],
            filtered_news: vec!["TCS shares rally".to_string()],
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "portfolio": ["TCS"],
                "filteredNews": ["TCS shares rally"],
            })
        );
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let client = ApiClientBuilder::new()
            .config(ApiConfig {
                base_url: "http://localhost:9000/".to_string(),
                ..ApiConfig::default()
            })
            .build()
            .unwrap();

        assert_eq!(client.endpoint("/api/news"), "http://localhost:9000/api/news");
    }
}
