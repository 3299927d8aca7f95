//! Metric aggregation across variant runs
//!
//! Combines the per-run result records of repeated evaluation trials into one
//! summary report of scalar statistics, tolerant of missing and non-numeric
//! values.

use std::collections::HashMap;

use super::types::{AggregateReport, MetricValue, ResultRecord};

/// Mean of a slice of floats, skipping NaN entries.
///
/// Returns NaN when every entry is NaN (or the slice is empty).
pub fn nan_mean(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        if !v.is_nan() {
            sum += v;
            count += 1;
        }
    }
    if count == 0 { f64::NAN } else { sum / count as f64 }
}

/// Round to 2 decimal places, ties to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Aggregator for computing summary statistics from variant result records
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricAggregator;

impl MetricAggregator {
    /// Create a new aggregator
    pub fn new() -> Self {
        Self
    }

    /// Aggregate result records into a summary report.
    ///
    /// The output keys are the union of keys across all records. Each value is
    /// the mean of the numeric values collected for that metric; entries that
    /// fail numeric coercion are skipped rather than counted as zero, and a
    /// metric with no numeric values at all comes out as NaN. Metrics whose
    /// name contains `pass_rate` are rescaled to a percentage; the `(%)`
    /// suffix appears only in the emitted log label, the report key stays the
    /// original name. Means are rounded to 2 decimal places, ties to even.
    ///
    /// One log line is emitted per output metric, in sorted key order so runs
    /// are comparable. Empty input produces an empty report and no log lines.
    pub fn aggregate(&self, results: &[ResultRecord]) -> AggregateReport {
        let mut collected: HashMap<String, Vec<f64>> = HashMap::new();
        for record in results {
            for (name, value) in record {
                collected
                    .entry(name.clone())
                    .or_default()
                    .push(MetricValue::coerce(value).as_f64());
            }
        }

        let mut names: Vec<String> = collected.keys().cloned().collect();
        names.sort();

        let mut report = AggregateReport::new();
        for name in names {
            let mut mean = nan_mean(&collected[&name]);
            let mut label = name.clone();
            if name.contains("pass_rate") {
                mean *= 100.0;
                label.push_str("(%)");
            }
            let rounded = round2(mean);
            tracing::info!("Metric {}: {}", label, rounded);
            report.insert(name, rounded);
        }
        report
    }
}
