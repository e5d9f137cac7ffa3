//! `/greet`: greeting built from `name` and optional `age`.

use serde_json::json;

use crate::http::{Payload, QueryParams};

/// Greeting sentence; the age clause is added only when an age was given.
pub fn greeting(name: &str, age: Option<i64>) -> String {
    match age {
        Some(age) => format!("Hello, {}! You are {} years old.", name, age),
        None => format!("Hello, {}!", name),
    }
}

pub async fn greet(params: QueryParams) -> Payload {
    let name = params.str_or("name", "World");
    let age = params.parse_opt::<i64>("age");

    tracing::debug!(name = %name, age = ?age, "Greeting");

    Payload::Json(json!({
        "message": greeting(name, age),
        "query_params": params.echo(),
    }))
}
