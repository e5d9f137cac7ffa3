//! Demo endpoints.
//!
//! Each submodule holds one endpoint's pure logic next to its axum handler.
//! All routes are GET; see [`routes`].

pub mod calculate;
pub mod data;
pub mod greet;
pub mod help;
pub mod navigation;
pub mod random;
pub mod stats;

use axum::{routing::get, Router};

/// Router for every demo endpoint, relative to the application root.
pub fn routes() -> Router {
    Router::new()
        .route("/", get(help::help))
        .route("/help", get(help::help))
        .route("/redirect_test", get(navigation::redirect_test))
        .route("/another_page", get(navigation::another_page))
        .route("/random", get(random::random_default))
        .route("/random/{n}", get(random::random_n))
        .route("/random_enhanced", get(random::random_enhanced))
        .route("/greet", get(greet::greet))
        .route("/calculate", get(calculate::calculate))
        .route("/stats", get(stats::stats))
        .route("/data", get(data::data))
}
