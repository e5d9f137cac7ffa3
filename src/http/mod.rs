//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → proxy.rs (base path + scheme normalization, before routing)
//!     → endpoints (handlers read params.rs)
//!     → response.rs (JSON / CSV / text)
//!     → Send to client
//! ```

pub mod params;
pub mod proxy;
pub mod request;
pub mod response;
pub mod server;

pub use params::{ParamError, ParamValue, QueryParams};
pub use proxy::{ProxyAdapter, ProxyContext};
pub use request::X_REQUEST_ID;
pub use response::Payload;
pub use server::HttpServer;
