//! Typed extraction of query-string parameters.
//!
//! Every handler reads its inputs through [`QueryParams`]: raw strings pass
//! through, typed values fall back to a default when absent or malformed,
//! and the received mapping can be echoed back verbatim.

use std::convert::Infallible;
use std::str::FromStr;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors surfaced by parameters that validate instead of defaulting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("parameter '{name}' has non-numeric entry '{entry}'")]
    InvalidNumberList { name: String, entry: String },
}

/// Types a query parameter can be coerced into.
///
/// Floats only count when finite: "nan", "inf" and out-of-range literals
/// parse under `FromStr` but cannot be rendered back as JSON numbers.
pub trait ParamValue: FromStr {
    fn is_acceptable(&self) -> bool {
        true
    }
}

impl ParamValue for i64 {}
impl ParamValue for u64 {}
impl ParamValue for usize {}

impl ParamValue for f64 {
    fn is_acceptable(&self) -> bool {
        self.is_finite()
    }
}

/// Decoded query string, in the order the caller sent it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decode a raw (still percent-encoded) query string.
    pub fn parse(query: &str) -> Self {
        let pairs = url::form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// First value supplied for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// String passthrough with a default.
    pub fn str_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// Parse a typed value; malformed input is treated as absent.
    pub fn parse_opt<T: ParamValue>(&self, name: &str) -> Option<T> {
        self.get(name)
            .and_then(|v| v.trim().parse::<T>().ok())
            .filter(|v| v.is_acceptable())
    }

    /// Parse a typed value, falling back to `default`.
    pub fn parse_or<T: ParamValue>(&self, name: &str, default: T) -> T {
        self.parse_opt(name).unwrap_or(default)
    }

    /// `true` only for the literal "true", in any case.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    /// Comma-separated finite floats. One bad entry fails the whole list.
    pub fn float_list(&self, name: &str, default: &str) -> Result<Vec<f64>, ParamError> {
        self.str_or(name, default)
            .split(',')
            .map(|entry| {
                entry
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_acceptable())
                    .ok_or_else(|| ParamError::InvalidNumberList {
                        name: name.to_string(),
                        entry: entry.to_string(),
                    })
            })
            .collect()
    }

    /// The received parameters as a JSON object: one key per distinct name,
    /// holding its first value, in first-appearance order.
    pub fn echo(&self) -> Value {
        let mut map = Map::new();
        for (k, v) in &self.pairs {
            if !map.contains_key(k) {
                map.insert(k.clone(), Value::String(v.clone()));
            }
        }
        Value::Object(map)
    }
}

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.uri.query().map(Self::parse).unwrap_or_default())
    }
}
