//! Error types for reliefwatch

use thiserror::Error;

/// Result type alias for reliefwatch operations
pub type ReliefResult<T> = Result<T, ReliefError>;

/// Main error type for reliefwatch
#[derive(Error, Debug, Clone)]
pub enum ReliefError {
    /// Configuration related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// ReliefWeb API errors
    #[error("ReliefWeb API error: {0}")]
    Api(String),

    /// LLM client errors
    #[error("LLM error: {0}")]
    Llm(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error with context
    #[error("Error: {0}")]
    Other(String),
}

impl ReliefError {
    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new ReliefWeb API error
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api(message.into())
    }

    /// Create a new LLM error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm(message.into())
    }

    /// Create a new invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<anyhow::Error> for ReliefError {
    fn from(error: anyhow::Error) -> Self {
        Self::Other(error.to_string())
    }
}

impl From<std::io::Error> for ReliefError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<serde_json::Error> for ReliefError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

impl From<reqwest::Error> for ReliefError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string())
    }
}
