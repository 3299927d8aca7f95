//! `disasters` command: search ReliefWeb disasters and print them

use colored::Colorize;
use reliefwatch_core::{Config, DisastersQuery, ReliefWebClient};

use crate::args::DisastersArgs;

pub async fn run(config: &Config, args: DisastersArgs) -> anyhow::Result<()> {
    let mut query = DisastersQuery::new(args.keyword)
        .limit(args.limit)
        .offset(args.offset)
        .detailed(args.detailed);
    if let (Some(from), Some(to)) = (args.date_from, args.date_to) {
        query = query.date_range(from, to);
    }
    if let Some(status) = args.status {
        query = query.status(status);
    }
    if let Some(country) = args.country {
        query = query.country(country);
    }
    if let Some(disaster_type) = args.disaster_type {
        query = query.disaster_type(disaster_type);
    }
    if let Some(id) = args.id {
        query = query.id(id);
    }
    if let Some(sort) = args.sort {
        query = query.sort(sort);
    }

    let client = ReliefWebClient::new(config.reliefweb.clone());
    let items = client.disasters(&query).await?;

    if items.is_empty() {
        println!("{}", "No disasters found.".yellow());
        return Ok(());
    }

    for item in &items {
        println!("{}", item.title().unwrap_or("(unnamed)").bold());
        if let Some(status) = item.fields["status"].as_str() {
            println!("status: {}", status);
        }
        if let Some(glide) = item.fields["glide"].as_str() {
            println!("glide: {}", glide);
        }
        if let Some(url) = item.url() {
            println!("{}", url.blue());
        }
        if let Some(description) = item.fields["description"].as_str() {
            println!("---------");
            println!("{}", description);
        }
        println!();
    }
    Ok(())
}
