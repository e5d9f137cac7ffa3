//! Query-parameter demo service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ trace ─▶ timeout ─▶ proxy adapter ─▶ router
//!                                                      (base path,      │
//!                                                       scheme)         ▼
//!                                                                   endpoints
//!                                                                (params → logic)
//!                                                                       │
//!     Client Response                                                   ▼
//!     ◀──────────────────────────────────────────────────────── JSON / CSV / text
//! ```
//!
//! Configuration comes from the TOML file named by `APP_CONFIG` (optional)
//! plus environment overrides.

use tokio::net::TcpListener;

use query_demo::config::load_from_env;
use query_demo::observability::{logging, metrics};
use query_demo::{HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_from_env()?;

    logging::init_logging(&config.observability);

    tracing::info!("query-demo v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        base_path = %config.proxy.base_path,
        static_dir = %config.static_files.dir,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(shutdown.trigger_on_signal());

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
