//! Request handlers for the distance endpoint.

use axum::{
    extract::{rejection::FormRejection, Form, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use airdistance_lib::DistanceQuery;

use crate::config::AppState;
use crate::envelope::ResponseEnvelope;

/// Raw form fields as submitted by the frontend.
///
/// Fields default to empty strings so absent values flow into the normal
/// validation sequence instead of a serde rejection.
#[derive(Debug, Deserialize)]
pub struct DistanceForm {
    #[serde(default)]
    pub aeropuerto_origen: String,
    #[serde(default)]
    pub aeropuerto_destino: String,
}

/// Handle `POST /api/v1/distance`.
///
/// Never lets an error escape: every failure path resolves to a failure
/// envelope with HTTP 200.
pub async fn calculate_distance(
    State(state): State<AppState>,
    form: Result<Form<DistanceForm>, FormRejection>,
) -> ResponseEnvelope {
    let request_id = generate_request_id();

    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => {
            warn!(request_id = %request_id, error = %rejection, "unreadable form body");
            return ResponseEnvelope::failure("both codes required");
        }
    };

    info!(
        request_id = %request_id,
        origin = %form.aeropuerto_origen,
        destination = %form.aeropuerto_destino,
        "handling distance request"
    );

    let query = match DistanceQuery::parse(&form.aeropuerto_origen, &form.aeropuerto_destino) {
        Ok(query) => query,
        Err(e) => {
            warn!(request_id = %request_id, reason = %e, "validation failed");
            return ResponseEnvelope::failure(e.to_string());
        }
    };

    match state.client().distance(&query).await {
        Ok(result) => {
            info!(
                request_id = %request_id,
                query = %query,
                kilometers = result.kilometers,
                "distance computed successfully"
            );
            ResponseEnvelope::success(result)
        }
        Err(e) => {
            warn!(request_id = %request_id, query = %query, reason = %e, "distance lookup failed");
            ResponseEnvelope::failure(e.to_string())
        }
    }
}

/// Fallback for non-POST methods on the endpoint.
///
/// The only branch that answers with a non-200 status.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ResponseEnvelope::failure("method not allowed, use POST")),
    )
}

/// Generate a unique request ID for tracing.
fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();

    format!("req-{:x}", timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ids_are_prefixed_and_distinct() {
        let a = generate_request_id();
        let b = generate_request_id();
        assert!(a.starts_with("req-"));
        assert_ne!(a, b);
    }

    #[test]
    fn form_fields_default_to_empty() {
        let form: DistanceForm =
            serde_json::from_value(serde_json::json!({"aeropuerto_origen": "LAX"})).unwrap();
        assert_eq!(form.aeropuerto_origen, "LAX");
        assert_eq!(form.aeropuerto_destino, "");
    }
}
