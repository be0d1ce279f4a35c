//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! [`build_app`] mounts them under `/api` with the shared layers.

pub mod flight;
pub mod middleware;

use std::time::Duration;

use axum::{routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

pub use flight::{flight_routes, FlightHandlers};

/// Builds the full application router.
pub fn build_app(handlers: FlightHandlers, request_timeout: Duration) -> Router {
    Router::new()
        .route("/livez", get(livez))
        .nest("/api", flight_routes(handlers))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
}

async fn livez() -> &'static str {
    "ok"
}
