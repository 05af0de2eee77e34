//! HTTP client for the AirportGap distance API.
//!
//! One outbound call per lookup, bounded by a fixed timeout; no retries and
//! no caching. Upstream statuses and transport faults are mapped onto the
//! library [`Error`] taxonomy so the service boundary only ever renders
//! messages.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::airport::{Airport, AirportCode, DistanceQuery, DistanceResult};
use crate::error::{Error, Result};

/// Production base URL of the AirportGap API.
pub const DEFAULT_BASE_URL: &str = "https://airportgap.com/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the AirportGap distance endpoint.
///
/// Cheap to clone; holds the connection pool, the base URL, and an optional
/// bearer token sourced from configuration.
#[derive(Debug, Clone)]
pub struct AirportGapClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl AirportGapClient {
    /// Build a client with the default 10-second request timeout.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        Self::with_timeout(base_url, token, REQUEST_TIMEOUT)
    }

    /// Build a client with an explicit request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent())
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Whether a bearer token is configured for outbound calls.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Look up the distance between the two airports of `query`.
    ///
    /// Issues `POST {base}/airports/distance` with a JSON body carrying the
    /// normalized codes as `from`/`to` parameters. Exactly one attempt is
    /// made per call.
    pub async fn distance(&self, query: &DistanceQuery) -> Result<DistanceResult> {
        let url = format!("{}/airports/distance", self.base_url);
        let params = DistanceParams {
            from: query.origin().as_str(),
            to: query.destination().as_str(),
        };

        let mut request = self.client.post(&url).json(&params);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), query = %query, "airportgap responded");

        if status == StatusCode::OK {
            let text = response.text().await?;
            let body: Value =
                serde_json::from_str(&text).map_err(|_| Error::MalformedBody)?;
            return parse_distance_body(body, query);
        }

        Err(match status.as_u16() {
            401 => Error::AuthenticationFailed,
            404 => Error::AirportNotFound,
            422 => Error::UnknownAirport {
                detail: read_error_detail(response).await,
            },
            429 => Error::RateLimited,
            status if status >= 500 => Error::UpstreamServer,
            status => Error::UnexpectedStatus { status },
        })
    }
}

fn user_agent() -> String {
    format!("airdistance-lib/{version}", version = env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Serialize)]
struct DistanceParams<'a> {
    from: &'a str,
    to: &'a str,
}

#[derive(Debug, Deserialize)]
struct DistanceBody {
    #[serde(default)]
    data: Option<DistanceData>,
}

#[derive(Debug, Deserialize)]
struct DistanceData {
    #[serde(default)]
    attributes: Option<DistanceAttributes>,
}

#[derive(Debug, Deserialize)]
struct DistanceAttributes {
    #[serde(default)]
    from_airport: Option<AirportAttributes>,
    #[serde(default)]
    to_airport: Option<AirportAttributes>,
    #[serde(default)]
    kilometers: Option<f64>,
    #[serde(default)]
    miles: Option<f64>,
    #[serde(default)]
    nautical_miles: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct AirportAttributes {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    #[serde(default)]
    detail: Option<String>,
}

/// Pull the human-readable detail out of an AirportGap error body, if any.
async fn read_error_detail(response: reqwest::Response) -> Option<String> {
    let body: ErrorBody = response.json().await.ok()?;
    let details: Vec<String> = body
        .errors
        .into_iter()
        .filter_map(|entry| entry.detail)
        .collect();
    if details.is_empty() {
        None
    } else {
        Some(details.join("; "))
    }
}

fn parse_distance_body(body: Value, query: &DistanceQuery) -> Result<DistanceResult> {
    let body: DistanceBody =
        serde_json::from_value(body).map_err(|_| Error::UnexpectedShape)?;
    let attributes = body
        .data
        .and_then(|data| data.attributes)
        .ok_or(Error::UnexpectedShape)?;

    let mut missing = Vec::new();
    if attributes.from_airport.is_none() {
        missing.push("from_airport");
    }
    if attributes.to_airport.is_none() {
        missing.push("to_airport");
    }
    if attributes.kilometers.is_none() {
        missing.push("kilometers");
    }
    if attributes.miles.is_none() {
        missing.push("miles");
    }
    if attributes.nautical_miles.is_none() {
        missing.push("nautical_miles");
    }
    if !missing.is_empty() {
        return Err(Error::MissingFields {
            fields: missing.iter().map(|f| f.to_string()).collect(),
        });
    }

    // All five fields were just checked above.
    let from_airport = attributes.from_airport.unwrap_or_default();
    let to_airport = attributes.to_airport.unwrap_or_default();

    Ok(DistanceResult {
        origin: into_airport(from_airport, query.origin().clone()),
        destination: into_airport(to_airport, query.destination().clone()),
        kilometers: round_distance(attributes.kilometers.unwrap_or_default()),
        miles: round_distance(attributes.miles.unwrap_or_default()),
        nautical_miles: round_distance(attributes.nautical_miles.unwrap_or_default()),
    })
}

fn into_airport(raw: AirportAttributes, code: AirportCode) -> Airport {
    Airport {
        code,
        name: raw.name.unwrap_or_default(),
        city: raw.city.unwrap_or_default(),
        country: raw.country.unwrap_or_default(),
    }
}

/// Round an upstream distance to the nearest integer, per contract.
fn round_distance(value: f64) -> i64 {
    value.round() as i64
}
