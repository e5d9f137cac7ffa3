//! `/random`, `/random/{n}` and `/random_enhanced`.
//!
//! Each request draws from its own generator. A `seed` makes that request
//! reproducible without affecting any other request.

use axum::{extract::Path, Json};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use serde::Serialize;
use serde_json::json;

use crate::http::{Payload, QueryParams};

pub const DEFAULT_RANDOM_COUNT: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    Uniform,
    Normal,
}

impl Distribution {
    /// Anything other than "normal" samples uniformly.
    pub fn from_param(value: &str) -> Self {
        if value == "normal" {
            Self::Normal
        } else {
            Self::Uniform
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    Float,
    Integers,
}

impl NumberFormat {
    /// Anything other than "integers" keeps floats.
    pub fn from_param(value: &str) -> Self {
        if value == "integers" {
            Self::Integers
        } else {
            Self::Float
        }
    }
}

/// Sampled values in their output representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Samples {
    Floats(Vec<f64>),
    Integers(Vec<i64>),
}

/// Generator for a single request.
pub fn request_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Draw `count` values. Uniform draws are `min + (max - min) * u` with
/// `u` in `[0, 1)`, so `min > max` and `min == max` are both accepted.
pub fn sample<R: Rng>(
    rng: &mut R,
    count: usize,
    distribution: Distribution,
    min: f64,
    max: f64,
) -> Vec<f64> {
    (0..count)
        .map(|_| match distribution {
            Distribution::Normal => rng.sample::<f64, _>(StandardNormal),
            Distribution::Uniform => min + (max - min) * rng.gen::<f64>(),
        })
        .collect()
}

/// Truncates toward zero for `Integers`.
pub fn format_samples(values: Vec<f64>, format: NumberFormat) -> Samples {
    match format {
        NumberFormat::Float => Samples::Floats(values),
        NumberFormat::Integers => Samples::Integers(values.into_iter().map(|v| v as i64).collect()),
    }
}

pub async fn random_default() -> Json<Vec<f64>> {
    random_values(DEFAULT_RANDOM_COUNT)
}

pub async fn random_n(Path(n): Path<usize>) -> Json<Vec<f64>> {
    random_values(n)
}

fn random_values(n: usize) -> Json<Vec<f64>> {
    let mut rng = request_rng(None);
    Json(sample(&mut rng, n, Distribution::Uniform, 0.0, 1.0))
}

pub async fn random_enhanced(params: QueryParams) -> Payload {
    let count = params.parse_or("count", 10_usize);
    let min = params.parse_or("min", 0.0_f64);
    let max = params.parse_or("max", 1.0_f64);
    let seed = params.parse_opt::<u64>("seed");
    let distribution = params.str_or("distribution", "uniform");
    let format = params.str_or("format", "float");

    let mut rng = request_rng(seed);
    let values = sample(&mut rng, count, Distribution::from_param(distribution), min, max);
    let numbers = format_samples(values, NumberFormat::from_param(format));

    tracing::debug!(count, seed = ?seed, distribution = %distribution, "Generated random numbers");

    Payload::Json(json!({
        "numbers": numbers,
        "parameters": {
            "count": count,
            "min": min,
            "max": max,
            "seed": seed,
            "distribution": distribution,
            "format": format,
        },
        "query_params": params.echo(),
    }))
}
