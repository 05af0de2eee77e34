//! Environment-sourced configuration and shared handler state.

use std::env;

use airdistance_lib::{AirportGapClient, DEFAULT_BASE_URL};

/// Runtime configuration for the distance service.
///
/// The bearer token comes from the environment and is never hard-coded; an
/// absent token means unauthenticated upstream calls.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the AirportGap API.
    pub base_url: String,
    /// Optional bearer token for upstream calls.
    pub token: Option<String>,
    /// HTTP port to listen on.
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            port: 8080,
        }
    }
}

impl ServiceConfig {
    /// Read configuration from the environment.
    ///
    /// - `AIRPORTGAP_BASE_URL` - upstream base URL (default: production API)
    /// - `AIRPORTGAP_API_TOKEN` - optional bearer token
    /// - `SERVICE_PORT` - HTTP port (default: 8080)
    pub fn from_env() -> Self {
        let base_url =
            env::var("AIRPORTGAP_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let token = env::var("AIRPORTGAP_API_TOKEN")
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let port = parse_port(env::var("SERVICE_PORT").ok());

        Self {
            base_url,
            token,
            port,
        }
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    raw.and_then(|p| p.parse().ok()).unwrap_or(8080)
}

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable; the client carries its own connection pool. There is
/// no other shared state, so handlers need no coordination.
#[derive(Clone)]
pub struct AppState {
    client: AirportGapClient,
}

impl AppState {
    pub fn new(client: AirportGapClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &AirportGapClient {
        &self.client
    }
}
