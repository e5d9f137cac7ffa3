//! `/calculate`: binary arithmetic on `x` and `y`.

use std::str::FromStr;

use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::http::{Payload, QueryParams};

pub const DIVISION_BY_ZERO: &str = "Error: Division by zero";
pub const INVALID_OPERATION: &str = "Error: Invalid operation";
pub const OUT_OF_RANGE: &str = "Error: Result out of range";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported operation '{0}'")]
pub struct UnsupportedOperation(pub String);

impl FromStr for Operation {
    type Err = UnsupportedOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            other => Err(UnsupportedOperation(other.to_string())),
        }
    }
}

/// Value of the `result` field: a number, or an error message in its place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Value(f64),
    Error(&'static str),
}

impl Operation {
    /// Finite inputs can still overflow to infinity; that is reported as an
    /// error rather than a number JSON cannot carry.
    pub fn apply(self, x: f64, y: f64) -> Outcome {
        let value = match self {
            Self::Add => x + y,
            Self::Subtract => x - y,
            Self::Multiply => x * y,
            Self::Divide if y == 0.0 => return Outcome::Error(DIVISION_BY_ZERO),
            Self::Divide => x / y,
        };
        if value.is_finite() {
            Outcome::Value(value)
        } else {
            Outcome::Error(OUT_OF_RANGE)
        }
    }
}

/// Evaluate a named operation; unsupported names become an error outcome.
pub fn evaluate(operation: &str, x: f64, y: f64) -> Outcome {
    match operation.parse::<Operation>() {
        Ok(op) => op.apply(x, y),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected operation");
            Outcome::Error(INVALID_OPERATION)
        }
    }
}

pub async fn calculate(params: QueryParams) -> Payload {
    let operation = params.str_or("operation", "add");
    let x = params.parse_or("x", 0.0_f64);
    let y = params.parse_or("y", 0.0_f64);

    let result = evaluate(operation, x, y);
    tracing::debug!(operation = %operation, x, y, result = ?result, "Calculated");

    Payload::Json(json!({
        "operation": operation,
        "x": x,
        "y": y,
        "result": result,
        "query_params": params.echo(),
    }))
}
