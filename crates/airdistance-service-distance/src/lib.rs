//! Airport distance lookup HTTP microservice.
//!
//! Thin-handler pattern: the axum handler parses the submitted form, runs
//! the validation sequence from `airdistance-lib`, calls the AirportGap
//! client, and formats the uniform response envelope. All business rules
//! live in the library; this crate provides only HTTP glue.
//!
//! # Endpoints
//!
//! - `POST /api/v1/distance` - Look up the distance between two airports
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe

#![deny(warnings)]

mod config;
mod envelope;
mod handlers;
mod health;
pub mod logging;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::{AppState, ServiceConfig};
pub use envelope::{AirportPayload, DistancePayload, ResponseEnvelope};

/// Build the service router over the given state.
///
/// Separate from `main` so tests can drive the exact production routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/distance", post(handlers::calculate_distance))
        .route("/health/live", get(health::health_live))
        .route("/health/ready", get(health::health_ready))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
