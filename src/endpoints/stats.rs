//! `/stats`: summary statistics over a comma-separated list of numbers.

use serde_json::{json, Map, Value};

use crate::http::{Payload, QueryParams};

pub const INVALID_NUMBERS: &str = "Invalid numbers format. Use comma-separated values.";
pub const OUT_OF_RANGE: &str = "Error: Result out of range";

/// Which statistics to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatSelector {
    All,
    Mean,
    Sum,
    Std,
    Min,
    Max,
    /// Unknown selector name; computes nothing.
    Unsupported,
}

impl StatSelector {
    pub fn from_param(value: &str) -> Self {
        match value {
            "all" => Self::All,
            "mean" => Self::Mean,
            "sum" => Self::Sum,
            "std" => Self::Std,
            "min" => Self::Min,
            "max" => Self::Max,
            _ => Self::Unsupported,
        }
    }

    fn includes(self, stat: StatSelector) -> bool {
        self == Self::All || self == stat
    }
}

pub fn sum(numbers: &[f64]) -> f64 {
    numbers.iter().sum()
}

pub fn mean(numbers: &[f64]) -> f64 {
    sum(numbers) / numbers.len() as f64
}

/// Population standard deviation.
pub fn std_dev(numbers: &[f64]) -> f64 {
    let m = mean(numbers);
    let variance = numbers.iter().map(|n| (n - m).powi(2)).sum::<f64>() / numbers.len() as f64;
    variance.sqrt()
}

pub fn min(numbers: &[f64]) -> f64 {
    numbers.iter().copied().fold(f64::INFINITY, f64::min)
}

pub fn max(numbers: &[f64]) -> f64 {
    numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Statistics named by `selector`, in mean/sum/std/min/max order. Inputs
/// are finite, but a sum can still overflow; such entries carry an error
/// string instead of a number.
pub fn summarize(numbers: &[f64], selector: StatSelector) -> Map<String, Value> {
    let stats: [(StatSelector, &str, fn(&[f64]) -> f64); 5] = [
        (StatSelector::Mean, "mean", mean),
        (StatSelector::Sum, "sum", sum),
        (StatSelector::Std, "std", std_dev),
        (StatSelector::Min, "min", min),
        (StatSelector::Max, "max", max),
    ];

    stats
        .iter()
        .filter(|(stat, _, _)| selector.includes(*stat))
        .map(|(_, name, f)| {
            let value = f(numbers);
            let value = if value.is_finite() {
                json!(value)
            } else {
                json!(OUT_OF_RANGE)
            };
            (name.to_string(), value)
        })
        .collect()
}

pub async fn stats(params: QueryParams) -> Payload {
    let operation = params.str_or("operation", "all");

    let numbers = match params.float_list("numbers", "1,2,3,4,5") {
        Ok(numbers) => numbers,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected numbers list");
            return Payload::Json(json!({ "error": INVALID_NUMBERS }));
        }
    };

    let results = summarize(&numbers, StatSelector::from_param(operation));

    Payload::Json(json!({
        "numbers": numbers,
        "operation": operation,
        "results": results,
        "query_params": params.echo(),
    }))
}
