//! Reverse proxy adapter.
//!
//! Runs before routing so the router only ever sees paths relative to the
//! application root.
//!
//! # Responsibilities
//! - Strip the configured base path from the request path
//! - Resolve the scheme the client used from the upstream's scheme header
//! - Attach a [`ProxyContext`] for handlers that build URLs
//!
//! The body and all other request metadata are left untouched.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{request::Parts, uri::PathAndQuery, HeaderName, Request, Uri},
    middleware::Next,
    response::Response,
};

use crate::config::ProxyConfig;

/// Request-scoped view of how the upstream proxy presented us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyContext {
    /// Prefix the application is mounted under ("" at the root).
    pub script_name: String,
    /// Scheme the client used ("http" or "https").
    pub scheme: String,
}

impl ProxyContext {
    /// URL path of the application root, as the client sees it.
    pub fn root_path(&self) -> String {
        format!("{}/", self.script_name)
    }

    /// Client-visible path for an application-relative `path`.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.script_name, path)
    }
}

impl Default for ProxyContext {
    fn default() -> Self {
        Self {
            script_name: String::new(),
            scheme: "https".to_string(),
        }
    }
}

/// Handlers extract the context directly; without the adapter in front
/// (e.g. a bare router in tests) the defaults apply.
impl<S> FromRequestParts<S> for ProxyContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<ProxyContext>()
            .cloned()
            .unwrap_or_default())
    }
}

/// Settings resolved once from [`ProxyConfig`].
#[derive(Debug, Clone)]
pub struct ProxyAdapter {
    base_path: String,
    scheme_header: HeaderName,
    default_scheme: String,
}

impl ProxyAdapter {
    /// Build the adapter. Config is validated before this point, so an
    /// unparsable header name falls back to `x-scheme`.
    pub fn from_config(config: &ProxyConfig) -> Self {
        let scheme_header = HeaderName::from_bytes(config.scheme_header.as_bytes())
            .unwrap_or_else(|_| HeaderName::from_static("x-scheme"));
        Self {
            base_path: config.base_path.clone(),
            scheme_header,
            default_scheme: config.default_scheme.clone(),
        }
    }

    /// Rewrite the request in place and return the context it was given.
    pub fn adapt(&self, request: &mut Request<Body>) -> ProxyContext {
        if !self.base_path.is_empty() {
            if let Some(uri) = strip_prefix(request.uri(), &self.base_path) {
                *request.uri_mut() = uri;
            }
        }

        let scheme = request
            .headers()
            .get(&self.scheme_header)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(self.default_scheme.as_str())
            .to_string();

        let context = ProxyContext {
            script_name: self.base_path.clone(),
            scheme,
        };
        request.extensions_mut().insert(context.clone());
        context
    }
}

/// Returns the rewritten URI when `prefix` matches, `None` otherwise.
fn strip_prefix(uri: &Uri, prefix: &str) -> Option<Uri> {
    let rest = uri.path().strip_prefix(prefix)?;
    // "/app" must not swallow "/apple".
    if !rest.is_empty() && !rest.starts_with('/') {
        return None;
    }
    let path = if rest.is_empty() { "/" } else { rest };
    let path_and_query = match uri.query() {
        Some(q) => format!("{}?{}", path, q),
        None => path.to_string(),
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query).ok()?);
    Uri::from_parts(parts).ok()
}

/// Middleware wrapping [`ProxyAdapter::adapt`].
pub async fn reverse_proxy_middleware(
    State(adapter): State<Arc<ProxyAdapter>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let original = request.uri().path().to_string();
    let context = adapter.adapt(&mut request);

    tracing::trace!(
        original_path = %original,
        path = %request.uri().path(),
        scheme = %context.scheme,
        "Proxy adapter applied"
    );

    next.run(request).await
}
