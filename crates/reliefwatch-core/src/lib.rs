//! Reliefwatch Core Library
//!
//! This crate provides the core functionality for the reliefwatch assistant:
//! ReliefWeb search queries, chat-model integration, evaluation metric
//! aggregation, and configuration.

pub mod config;
pub mod error;
pub mod llm;
pub mod metrics;
pub mod reliefweb;

// Re-export commonly used types
pub use config::{Config, LoggingConfig};
pub use error::{ReliefError, ReliefResult};
pub use llm::{ChatMessage, ChatProvider, ChatResponse, LlmConfig, MistralProvider};
pub use metrics::{AggregateReport, MetricAggregator, MetricValue, ResultRecord};
pub use reliefweb::{DisastersQuery, ReliefWebClient, ReliefWebConfig, ReportsQuery};
