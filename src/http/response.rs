//! Response formatting.
//!
//! Handlers return a [`Payload`]; this module owns the mapping from payload
//! kind to body encoding and `Content-Type`.
//!
//! # Design Decisions
//! - Domain errors are part of the JSON body, never an HTTP error status
//! - CSV is produced already rendered by the handler; only the header differs

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

pub const CONTENT_TYPE_CSV: &str = "text/csv";
pub const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

/// A rendered handler result.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Csv(String),
    Text(String),
}

impl IntoResponse for Payload {
    fn into_response(self) -> Response {
        match self {
            Payload::Json(value) => (StatusCode::OK, Json(value)).into_response(),
            Payload::Csv(body) => with_content_type(body, CONTENT_TYPE_CSV),
            Payload::Text(body) => with_content_type(body, CONTENT_TYPE_TEXT),
        }
    }
}

fn with_content_type(body: String, content_type: &'static str) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static(content_type))],
        body,
    )
        .into_response()
}

/// `302 Found` pointing at `location`.
pub fn found(location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (StatusCode::FOUND, [(header::LOCATION, value)]).into_response(),
        Err(_) => {
            tracing::error!(location = %location, "Redirect target is not a valid header value");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
