//! `aggregate` command: combine per-run metric records into a summary

use std::fs;

use colored::Colorize;
use reliefwatch_core::{MetricAggregator, ResultRecord};

use crate::args::AggregateArgs;

pub fn run(args: AggregateArgs) -> anyhow::Result<()> {
    let contents = fs::read_to_string(&args.path)?;
    let records: Vec<ResultRecord> = serde_json::from_str(&contents)?;

    let report = MetricAggregator::new().aggregate(&records);
    if report.is_empty() {
        println!("{}", "No metrics to aggregate.".yellow());
        return Ok(());
    }

    let mut names: Vec<&String> = report.keys().collect();
    names.sort();
    for name in names {
        let value = report[name.as_str()];
        if value.is_nan() {
            println!("{} = {}", name.bold(), "n/a".red());
        } else {
            println!("{} = {}", name.bold(), value);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;

    fn write_records(json: &str) -> (tempfile::NamedTempFile, PathBuf) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", json).unwrap();
        let path = file.path().to_path_buf();
        (file, path)
    }

    #[test]
    fn test_aggregate_from_file() {
        let (_guard, path) = write_records(
            r#"[{"accuracy": 0.8, "pass_rate": 0.5}, {"accuracy": 0.6, "pass_rate": "bad"}]"#,
        );

        assert!(run(AggregateArgs { path }).is_ok());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = PathBuf::from("/nonexistent/results.json");
        assert!(run(AggregateArgs { path }).is_err());
    }

    #[test]
    fn test_non_array_payload_is_an_error() {
        let (_guard, path) = write_records(r#"{"accuracy": 0.8}"#);
        assert!(run(AggregateArgs { path }).is_err());
    }
}
