//! `ask` command: answer a question from ReliefWeb report data
//!
//! Searches situation reports for the question text, then hands the report
//! JSON and the question to the chat model.

use colored::Colorize;
use reliefwatch_core::llm::ChatMessage;
use reliefwatch_core::reliefweb::ApiItem;
use reliefwatch_core::{ChatProvider, Config, MistralProvider, ReliefWebClient, ReportsQuery};

use crate::args::AskArgs;

const SYSTEM_TEMPLATE: &str = "You are a helpful assistant. Using the output from a query to \
ReliefWeb, answer the user's question. You always provide your sources when answering a \
question, providing the report name, link, and quoting the relevant information.\n";

/// Render the retrieved report fields as the system-prompt context block
fn report_context(items: &[ApiItem]) -> anyhow::Result<String> {
    let fields: Vec<&serde_json::Value> = items.iter().map(|item| &item.fields).collect();
    Ok(serde_json::to_string_pretty(&fields)?)
}

pub async fn run(mut config: Config, args: AskArgs) -> anyhow::Result<()> {
    if config.llm.api_key.is_none() {
        let key = dialoguer::Password::new()
            .with_prompt("Enter your Mistral API key")
            .interact()?;
        config.llm.api_key = Some(key);
    }

    let query = ReportsQuery::new(args.question.clone()).format_name(args.format_name);
    let client = ReliefWebClient::new(config.reliefweb.clone());
    let items = client.reports(&query).await?;

    if items.is_empty() {
        println!("{}", "No reports found for that question.".yellow());
        return Ok(());
    }

    let context = report_context(&items)?;
    let messages = vec![
        ChatMessage::system(format!("{}{}.", SYSTEM_TEMPLATE, context)),
        ChatMessage::user(args.question),
    ];

    let provider = MistralProvider::new(config.llm);
    let response = provider.chat(&messages).await?;

    println!("{}", response.content);
    if let Some(usage) = response.usage {
        tracing::debug!(
            "used {} prompt and {} completion tokens",
            usage.prompt_tokens,
            usage.completion_tokens
        );
    }
    Ok(())
}
