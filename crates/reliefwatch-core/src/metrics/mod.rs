//! Metric aggregation for evaluation results
//!
//! This module provides types and utilities for combining per-run metric
//! records of evaluated variants into summary statistics.

mod aggregator;
mod types;

pub use aggregator::{MetricAggregator, nan_mean};
pub use types::{AggregateReport, MetricValue, ResultRecord};
