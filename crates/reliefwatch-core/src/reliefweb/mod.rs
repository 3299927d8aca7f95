//! ReliefWeb API integration
//!
//! Query builders for the ReliefWeb v1 search API (reports and disasters
//! endpoints), response envelope types, and a thin POST client.

mod client;
mod query;
mod types;

pub use client::{ReliefWebClient, ReliefWebConfig};
pub use query::{DisastersQuery, ReportsQuery, to_iso8601};
pub use types::{ApiItem, ApiResponse};
