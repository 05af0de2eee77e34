//! Uniform success/failure envelope returned to the caller.
//!
//! Failures are communicated in the payload, not the status code: every
//! branch of the handler serializes to HTTP 200 with `"success"` flagging
//! the outcome. The wire field names keep the Spanish form contract of the
//! original frontend (`aeropuerto_origen`, `distancia_km`, ...).

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Serialize, Serializer};

use airdistance_lib::{Airport, DistanceResult};

/// One airport descriptor as serialized to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirportPayload {
    pub codigo: String,
    pub nombre: String,
    pub ciudad: String,
    pub pais: String,
}

impl From<Airport> for AirportPayload {
    fn from(airport: Airport) -> Self {
        Self {
            codigo: airport.code.as_str().to_string(),
            nombre: airport.name,
            ciudad: airport.city,
            pais: airport.country,
        }
    }
}

/// Successful lookup payload, flattened into the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistancePayload {
    pub aeropuerto_origen: AirportPayload,
    pub aeropuerto_destino: AirportPayload,
    pub distancia_km: i64,
    pub distancia_miles: i64,
    pub distancia_millas_nauticas: i64,
}

impl From<DistanceResult> for DistancePayload {
    fn from(result: DistanceResult) -> Self {
        Self {
            aeropuerto_origen: result.origin.into(),
            aeropuerto_destino: result.destination.into(),
            distancia_km: result.kilometers,
            distancia_miles: result.miles,
            distancia_millas_nauticas: result.nautical_miles,
        }
    }
}

/// Tagged success/failure union sent to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseEnvelope {
    Success(DistancePayload),
    Failure(String),
}

impl ResponseEnvelope {
    pub fn success(result: DistanceResult) -> Self {
        Self::Success(result.into())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }
}

impl Serialize for ResponseEnvelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ResponseEnvelope::Success(payload) => {
                #[derive(Serialize)]
                struct Body<'a> {
                    success: bool,
                    #[serde(flatten)]
                    payload: &'a DistancePayload,
                }
                Body {
                    success: true,
                    payload,
                }
                .serialize(serializer)
            }
            ResponseEnvelope::Failure(error) => {
                #[derive(Serialize)]
                struct Body<'a> {
                    success: bool,
                    error: &'a str,
                }
                Body {
                    success: false,
                    error,
                }
                .serialize(serializer)
            }
        }
    }
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airdistance_lib::AirportCode;

    fn sample_result() -> DistanceResult {
        DistanceResult {
            origin: Airport {
                code: AirportCode::parse("LAX").unwrap(),
                name: "Los Angeles International Airport".to_string(),
                city: "Los Angeles".to_string(),
                country: "United States".to_string(),
            },
            destination: Airport {
                code: AirportCode::parse("JFK").unwrap(),
                name: "John F. Kennedy International Airport".to_string(),
                city: "New York".to_string(),
                country: "United States".to_string(),
            },
            kilometers: 3974,
            miles: 2470,
            nautical_miles: 2145,
        }
    }

    #[test]
    fn success_envelope_uses_wire_field_names() {
        let envelope = ResponseEnvelope::success(sample_result());
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["aeropuerto_origen"]["codigo"], "LAX");
        assert_eq!(json["aeropuerto_destino"]["ciudad"], "New York");
        assert_eq!(json["aeropuerto_origen"]["pais"], "United States");
        assert_eq!(json["distancia_km"], 3974);
        assert_eq!(json["distancia_miles"], 2470);
        assert_eq!(json["distancia_millas_nauticas"], 2145);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn failure_envelope_is_flat() {
        let envelope = ResponseEnvelope::failure("both codes required");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "both codes required");
        assert!(json.get("distancia_km").is_none());
    }
}
