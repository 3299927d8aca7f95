//! CLI argument definitions using clap
//!
//! - reliefwatch reports "<keyword>"      # Search ReliefWeb reports
//! - reliefwatch disasters "<keyword>"    # Search ReliefWeb disasters
//! - reliefwatch ask "<question>"         # Answer a question from report data
//! - reliefwatch aggregate <file>         # Aggregate variant metric records

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reliefwatch")]
#[command(about = "ReliefWeb humanitarian-data assistant")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file (defaults to reliefwatch.json when present)
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search ReliefWeb reports and news
    Reports(ReportsArgs),
    /// Search ReliefWeb disasters
    Disasters(DisastersArgs),
    /// Answer a question using ReliefWeb report data and a chat model
    Ask(AskArgs),
    /// Aggregate per-run metric records into a summary report
    Aggregate(AggregateArgs),
}

#[derive(Args)]
pub struct ReportsArgs {
    /// Search keyword
    pub keyword: String,

    /// Start of the creation date range (YYYY-MM-DD); requires --date-to
    #[arg(long, requires = "date_to")]
    pub date_from: Option<String>,

    /// End of the creation date range (YYYY-MM-DD); requires --date-from
    #[arg(long, requires = "date_from")]
    pub date_to: Option<String>,

    /// Filter by disaster ID
    #[arg(long)]
    pub disaster_id: Option<String>,

    /// Filter by report format (e.g. "Situation Report", "Assessment", "Map")
    #[arg(long)]
    pub format_name: Option<String>,

    /// Sort order (e.g. "date.created:desc")
    #[arg(long)]
    pub sort: Option<String>,

    /// Pagination offset
    #[arg(long, default_value_t = 0)]
    pub offset: u32,
}

#[derive(Args)]
pub struct DisastersArgs {
    /// Search keyword
    #[arg(default_value = "")]
    pub keyword: String,

    /// Start of the event date range (YYYY-MM-DD); requires --date-to
    #[arg(long, requires = "date_to")]
    pub date_from: Option<String>,

    /// End of the event date range (YYYY-MM-DD); requires --date-from
    #[arg(long, requires = "date_from")]
    pub date_to: Option<String>,

    /// Filter by status (e.g. "ongoing", "past")
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by country name
    #[arg(long)]
    pub country: Option<String>,

    /// Filter by disaster type (e.g. "Flood", "Earthquake", "Snow Avalanche")
    #[arg(long)]
    pub disaster_type: Option<String>,

    /// Filter by disaster ID
    #[arg(long)]
    pub id: Option<String>,

    /// Sort order (e.g. "date.event:desc")
    #[arg(long)]
    pub sort: Option<String>,

    /// Maximum number of results
    #[arg(long, default_value_t = 20)]
    pub limit: u32,

    /// Pagination offset
    #[arg(long, default_value_t = 0)]
    pub offset: u32,

    /// Include the long-form description in results
    #[arg(long)]
    pub detailed: bool,
}

#[derive(Args)]
pub struct AskArgs {
    /// The question to answer
    pub question: String,

    /// Report format to search (e.g. "Situation Report")
    #[arg(long, default_value = "Situation Report")]
    pub format_name: String,
}

#[derive(Args)]
pub struct AggregateArgs {
    /// Path to a JSON file holding an array of per-run metric records
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_reports() {
        let cli = Cli::parse_from([
            "reliefwatch",
            "reports",
            "sudan crises",
            "--format-name",
            "Situation Report",
        ]);
        match cli.command {
            Commands::Reports(args) => {
                assert_eq!(args.keyword, "sudan crises");
                assert_eq!(args.format_name.as_deref(), Some("Situation Report"));
            }
            _ => panic!("expected reports command"),
        }
    }

    #[test]
    fn test_date_from_requires_date_to() {
        let result = Cli::try_parse_from([
            "reliefwatch",
            "reports",
            "flood",
            "--date-from",
            "2023-01-01",
        ]);
        assert!(result.is_err());
    }
}
