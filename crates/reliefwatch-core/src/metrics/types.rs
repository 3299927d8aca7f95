//! Core types for metric aggregation
//!
//! Result records arrive from external evaluation harnesses as loosely typed
//! JSON maps. [`MetricValue`] is the coercion boundary that turns each raw
//! value into either a usable number or an explicit non-numeric marker.

use std::collections::HashMap;

use serde_json::Value;

/// Metrics produced by a single evaluation run of a variant.
///
/// Values may be numbers, numeric strings, booleans, null, or anything else;
/// coercion happens inside the aggregator, never at deserialization time.
pub type ResultRecord = HashMap<String, Value>;

/// Aggregated summary: metric name to rounded mean.
///
/// A value is NaN when no record supplied a usable number for that metric.
pub type AggregateReport = HashMap<String, f64>;

/// A raw metric value after coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// Value was interpretable as a floating-point number
    Numeric(f64),
    /// Value carried no usable numeric signal
    NonNumeric,
}

impl MetricValue {
    /// Coerce a raw JSON value into a metric value.
    ///
    /// Numbers pass through. Strings are trimmed and parsed as `f64`
    /// (including `inf`/`NaN` spellings). Booleans coerce to 1.0/0.0.
    /// Null and structured values are non-numeric.
    pub fn coerce(value: &Value) -> Self {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(v) => Self::Numeric(v),
                None => Self::NonNumeric,
            },
            Value::String(s) => match s.trim().parse::<f64>() {
                Ok(v) => Self::Numeric(v),
                Err(_) => Self::NonNumeric,
            },
            Value::Bool(b) => Self::Numeric(if *b { 1.0 } else { 0.0 }),
            _ => Self::NonNumeric,
        }
    }

    /// Check if the value carries a usable number
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    /// The numeric value, with NaN as the missing-marker for non-numeric input
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Numeric(v) => *v,
            Self::NonNumeric => f64::NAN,
        }
    }
}
