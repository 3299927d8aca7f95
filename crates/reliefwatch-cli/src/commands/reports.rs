//! `reports` command: search ReliefWeb reports and print them

use colored::Colorize;
use reliefwatch_core::{Config, ReliefWebClient, ReportsQuery};

use crate::args::ReportsArgs;

pub async fn run(config: &Config, args: ReportsArgs) -> anyhow::Result<()> {
    let mut query = ReportsQuery::new(args.keyword);
    if let (Some(from), Some(to)) = (args.date_from, args.date_to) {
        query = query.date_range(from, to);
    }
    if let Some(id) = args.disaster_id {
        query = query.disaster_id(id);
    }
    if let Some(format) = args.format_name {
        query = query.format_name(format);
    }
    if let Some(sort) = args.sort {
        query = query.sort(sort);
    }
    query = query.offset(args.offset);

    let client = ReliefWebClient::new(config.reliefweb.clone());
    let items = client.reports(&query).await?;

    if items.is_empty() {
        println!("{}", "No reports found.".yellow());
        return Ok(());
    }

    for item in &items {
        println!("{}", item.title().unwrap_or("(untitled)").bold());
        if let Some(country) = item.primary_country() {
            println!("{}", country.cyan());
        }
        if let Some(url) = item.url() {
            println!("{}", url.blue());
        }
        println!("---------");
        if let Some(body) = item.body() {
            println!("{}", body);
        }
        println!();
    }
    Ok(())
}
