//! Health check handlers for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::config::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Whether an upstream bearer token is configured (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_token_configured: Option<bool>,
}

impl HealthStatus {
    fn alive() -> Self {
        Self {
            status: "ok".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            upstream_token_configured: None,
        }
    }

    fn ready(token_configured: bool) -> Self {
        Self {
            upstream_token_configured: Some(token_configured),
            ..Self::alive()
        }
    }
}

/// Liveness probe handler; no external dependencies are checked.
pub async fn health_live() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthStatus::alive()))
}

/// Readiness probe handler.
///
/// The service holds no loadable state, so readiness only reports whether
/// upstream calls will be authenticated.
pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let status = HealthStatus::ready(state.client().is_authenticated());
    (StatusCode::OK, Json(status))
}
