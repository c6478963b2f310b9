//! Defines the HTTP surface of the data API.
//!
//! ## Structure
//! - `GET /api/data` — database time + MinIO buckets envelope
//! - `GET /healthz`  — liveness
//! - `GET /readyz`   — readiness (database + MinIO)

use crate::{
    handlers::{
        data_handlers::get_data,
        health_handlers::{healthz, readyz},
    },
    services::data_service::DataService,
};
use axum::{Router, routing::get};

/// Build and return the router for all API routes.
///
/// The router carries shared state (`DataService`) to all handlers.
pub fn routes() -> Router<DataService> {
    Router::new()
        // health endpoints (mounted at root)
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/api/data", get(get_data))
}
