//! Shared helpers for driving the router in integration tests.

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use query_demo::config::AppConfig;
use query_demo::http::server::build_router;
use serde_json::Value;
use tower::ServiceExt;

/// Captured response.
#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

#[allow(dead_code)]
impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Router built from default config.
#[allow(dead_code)]
pub fn default_app() -> Router {
    build_router(&AppConfig::default())
}

/// Router mounted under `base_path`.
#[allow(dead_code)]
pub fn mounted_app(base_path: &str) -> Router {
    let mut config = AppConfig::default();
    config.proxy.base_path = base_path.to_string();
    build_router(&config)
}

/// Send a GET with optional extra headers.
#[allow(dead_code)]
pub async fn get_with(app: Router, uri: &str, headers: &[(&str, &str)]) -> TestResponse {
    let mut builder = Request::builder().uri(uri).header("host", "demo.test");
    for (k, v) in headers {
        builder = builder.header(*k, *v);
    }
    let response = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

#[allow(dead_code)]
pub async fn get(app: Router, uri: &str) -> TestResponse {
    get_with(app, uri, &[]).await
}
