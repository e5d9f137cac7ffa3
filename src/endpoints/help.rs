//! `/help` and `/`: catalog of endpoints with ready-to-click example URLs.

use axum::http::{header, HeaderMap};
use serde::Serialize;
use serde_json::json;

use crate::http::{Payload, ProxyContext};

/// One catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointDoc {
    pub endpoint: &'static str,
    pub description: &'static str,
    pub examples: Vec<String>,
}

const CATALOG: [(&str, &str, [&str; 3]); 5] = [
    (
        "/greet",
        "Greet with optional name and age",
        ["?name=John&age=25", "?name=Jane", ""],
    ),
    (
        "/calculate",
        "Perform calculations with query parameters",
        [
            "?operation=add&x=10&y=5",
            "?operation=multiply&x=3&y=7",
            "?x=15&y=3",
        ],
    ),
    (
        "/stats",
        "Calculate statistics on comma-separated numbers",
        [
            "?numbers=1,2,3,4,5",
            "?numbers=10,20,30&operation=mean",
            "?numbers=1,2,3,4,5&operation=sum",
        ],
    ),
    (
        "/data",
        "Get sample data with formatting options",
        [
            "?format=json&include_metadata=true",
            "?format=csv&sort=desc",
            "?limit=10&include_metadata=false",
        ],
    ),
    (
        "/random_enhanced",
        "Generate random numbers with various options",
        [
            "?count=10&min=0&max=100&seed=42",
            "?count=5&distribution=normal",
            "?count=20&min=1&max=6&format=integers",
        ],
    ),
];

/// Build the catalog with every example rooted at `base_url`.
pub fn catalog(base_url: &str) -> Vec<EndpointDoc> {
    CATALOG
        .iter()
        .map(|&(endpoint, description, queries)| EndpointDoc {
            endpoint,
            description,
            examples: queries
                .iter()
                .map(|q| format!("{}{}{}", base_url, endpoint, q))
                .collect(),
        })
        .collect()
}

/// `{scheme}://{host}` as the client addressed us.
pub fn base_url(headers: &HeaderMap, context: &ProxyContext) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    format!("{}://{}", context.scheme, host)
}

pub async fn help(headers: HeaderMap, context: ProxyContext) -> Payload {
    let base = base_url(&headers, &context);

    Payload::Json(json!({
        "message": "Available endpoints with query parameter examples",
        "endpoints": catalog(&base),
    }))
}
