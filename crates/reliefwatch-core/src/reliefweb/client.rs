//! Thin HTTP client for the ReliefWeb search API

use reqwest::Client;
use serde_json::Value;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ReliefError, ReliefResult};

use super::query::{DisastersQuery, ReportsQuery};
use super::types::{ApiItem, ApiResponse};

/// Configuration for the ReliefWeb client.
///
/// Always passed in explicitly; the client never reads ambient process state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReliefWebConfig {
    /// Base URL of the API
    pub base_url: String,
    /// Application name sent with every query, required by the API
    pub appname: String,
}

impl Default for ReliefWebConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.reliefweb.int/v1".to_string(),
            appname: "reliefwatch".to_string(),
        }
    }
}

/// ReliefWeb search API client
pub struct ReliefWebClient {
    config: ReliefWebConfig,
    http_client: Client,
}

impl ReliefWebClient {
    /// Create a new client with the given configuration
    pub fn new(config: ReliefWebConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Create a new client reusing an existing HTTP client
    pub fn with_client(config: ReliefWebConfig, http_client: Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &ReliefWebConfig {
        &self.config
    }

    /// Search the reports endpoint
    #[instrument(skip(self, query), level = "debug")]
    pub async fn reports(&self, query: &ReportsQuery) -> ReliefResult<Vec<ApiItem>> {
        self.post(query.endpoint(), query.to_body(&self.config.appname))
            .await
    }

    /// Search the disasters endpoint
    #[instrument(skip(self, query), level = "debug")]
    pub async fn disasters(&self, query: &DisastersQuery) -> ReliefResult<Vec<ApiItem>> {
        self.post(query.endpoint(), query.to_body(&self.config.appname))
            .await
    }

    async fn post(&self, endpoint: &str, body: Value) -> ReliefResult<Vec<ApiItem>> {
        let url = format!("{}/{}", self.config.base_url, endpoint);
        tracing::debug!("POST {} with query {}", url, body);

        let response = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ReliefError::api(format!("ReliefWeb request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(ReliefError::api(format!(
                "ReliefWeb API error (status {}): {}",
                status, error_text
            )));
        }

        let parsed: ApiResponse = response
            .json()
            .await
            .map_err(|e| ReliefError::api(format!("Failed to parse ReliefWeb response: {}", e)))?;

        tracing::debug!(
            "{} returned {} of {} results",
            endpoint,
            parsed.data.len(),
            parsed.total_count
        );
        Ok(parsed.data)
    }
}
