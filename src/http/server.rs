//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all endpoints
//! - Wire up middleware (request ID, tracing, timeout, proxy adapter, metrics)
//! - Serve static assets with a permissive CORS header
//! - Bind server to listener and shut down gracefully

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    middleware, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    services::ServeDir, set_header::SetResponseHeaderLayer, timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::endpoints;
use crate::http::proxy::{reverse_proxy_middleware, ProxyAdapter};
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};
use crate::observability::metrics;

/// HTTP server for the demo endpoints.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let router = build_router(&config);
        Self { router, config }
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            base_path = %self.config.proxy.base_path,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build the Axum router with all middleware layers.
///
/// The proxy adapter wraps an outer router whose only job is to fall back to
/// the application router, so the path is rewritten before any route
/// matching happens.
#[allow(deprecated)]
pub fn build_router(config: &AppConfig) -> Router {
    let adapter = Arc::new(ProxyAdapter::from_config(&config.proxy));

    let static_files = Router::new()
        .nest_service("/static", ServeDir::new(&config.static_files.dir))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ));

    let app = endpoints::routes()
        .route_layer(middleware::from_fn(metrics::track_metrics))
        .merge(static_files);

    Router::new()
        .fallback_service(app)
        .layer(middleware::from_fn_with_state(adapter, reverse_proxy_middleware))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.timeouts.request_secs,
        )))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id(request),
                )
            }),
        )
        .layer(propagate_request_id_layer())
        .layer(set_request_id_layer())
}
