//! Binary entry point for the airport distance lookup service.
//!
//! # Configuration
//!
//! - `AIRPORTGAP_BASE_URL` - Upstream base URL (default: production API)
//! - `AIRPORTGAP_API_TOKEN` - Optional bearer token for upstream calls
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text

#![deny(warnings)]

use std::net::SocketAddr;

use tracing::{info, warn};

use airdistance_lib::AirportGapClient;
use airdistance_service_distance::{
    app,
    logging::{init_logging, LoggingConfig},
    AppState, ServiceConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LoggingConfig::from_env());

    let config = ServiceConfig::from_env();
    if config.token.is_none() {
        warn!("AIRPORTGAP_API_TOKEN not set, upstream calls will be unauthenticated");
    }

    info!(base_url = %config.base_url, port = config.port, "starting distance service");

    let client = AirportGapClient::new(config.base_url.as_str(), config.token.clone())?;
    let state = AppState::new(client);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
