//! Reliefwatch CLI application
//!
//! A command-line interface for searching ReliefWeb humanitarian data,
//! answering questions about it with a chat model, and aggregating
//! evaluation metrics.
//!
//! ```bash
//! reliefwatch reports "sudan crises" --format-name "Situation Report"
//! reliefwatch disasters --country Nepal --disaster-type "Snow Avalanche"
//! reliefwatch ask "Snow avalanche total deaths every year?"
//! reliefwatch aggregate results.json
//! ```

mod args;
mod commands;

use clap::Parser;
use reliefwatch_core::LoggingConfig;
use reliefwatch_core::config::load_config;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Commands};

fn init_tracing(logging: &LoggingConfig) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.clone()));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match logging.format.as_str() {
        "json" => builder.json().init(),
        "compact" => builder.compact().init(),
        _ => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config_file.as_deref())?;
    init_tracing(&config.logging);

    match cli.command {
        Commands::Reports(args) => commands::reports::run(&config, args).await,
        Commands::Disasters(args) => commands::disasters::run(&config, args).await,
        Commands::Ask(args) => commands::ask::run(config, args).await,
        Commands::Aggregate(args) => commands::aggregate::run(args),
    }
}
