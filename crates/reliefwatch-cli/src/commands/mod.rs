//! CLI command implementations

pub mod aggregate;
pub mod ask;
pub mod disasters;
pub mod reports;
