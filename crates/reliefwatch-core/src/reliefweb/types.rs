//! ReliefWeb API response types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response envelope returned by the search endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Total number of results matching the query
    #[serde(rename = "totalCount", default)]
    pub total_count: u64,
    /// The result items
    #[serde(default)]
    pub data: Vec<ApiItem>,
}

/// A single search result item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiItem {
    /// Item ID
    #[serde(default)]
    pub id: Option<String>,
    /// Relevance score
    #[serde(default)]
    pub score: Option<f64>,
    /// The projected fields requested via `fields.include`
    #[serde(default)]
    pub fields: Value,
}

impl ApiItem {
    /// Report title (reports endpoint) or disaster name (disasters endpoint)
    pub fn title(&self) -> Option<&str> {
        self.fields["title"]
            .as_str()
            .or_else(|| self.fields["name"].as_str())
    }

    /// Canonical URL of the item
    pub fn url(&self) -> Option<&str> {
        self.fields["url"].as_str()
    }

    /// Report body text, when requested
    pub fn body(&self) -> Option<&str> {
        self.fields["body"].as_str()
    }

    /// Primary country name, when present
    pub fn primary_country(&self) -> Option<&str> {
        self.fields["primary_country"]["name"].as_str()
    }
}
