use thiserror::Error;

/// Convenient result alias for the airdistance library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Every failure path of a distance lookup resolves to one of these
/// variants; callers render them with `Display` and never see a panic.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when the submitted airport codes fail validation. The message
    /// is safe to report verbatim to the caller.
    #[error("{message}")]
    Validation { message: String },

    /// Raised when the upstream API rejected the configured credentials.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Raised when the upstream API answered 404 for the requested pair.
    #[error("airport code(s) not found")]
    AirportNotFound,

    /// Raised when the upstream API could not resolve one or both codes.
    #[error("invalid or unknown airport code(s){}", format_detail(.detail))]
    UnknownAirport { detail: Option<String> },

    /// Raised when the upstream API throttled the request.
    #[error("rate limited, retry later")]
    RateLimited,

    /// Raised on any upstream 5xx response.
    #[error("upstream server error")]
    UpstreamServer,

    /// Raised on any upstream status with no dedicated mapping.
    #[error("unexpected upstream status: {status}")]
    UnexpectedStatus { status: u16 },

    /// Raised when a 200 body lacked required attribute fields.
    #[error("upstream response missing required field(s): {}", .fields.join(", "))]
    MissingFields { fields: Vec<String> },

    /// Raised when a 200 body had no usable `data`/`attributes` envelope.
    #[error("unexpected response shape")]
    UnexpectedShape,

    /// Raised when the upstream request exceeded its deadline.
    #[error("timeout")]
    Timeout,

    /// Raised when the upstream host refused or dropped the connection.
    #[error("connection error")]
    Connection,

    /// Raised when the response body was not parseable as JSON.
    #[error("malformed response")]
    MalformedBody,

    /// Raised on any other transport fault; carries only a brief message.
    #[error("unexpected error: {message}")]
    Unexpected { message: String },
}

impl Error {
    /// Build a validation error from a caller-facing message.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() {
            Error::Connection
        } else if err.is_decode() {
            Error::MalformedBody
        } else {
            Error::Unexpected {
                message: err.to_string(),
            }
        }
    }
}

fn format_detail(detail: &Option<String>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!(": {}", detail),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_reported_verbatim() {
        let err = Error::validation("both codes required");
        assert_eq!(err.to_string(), "both codes required");
    }

    #[test]
    fn unknown_airport_includes_detail_when_present() {
        let err = Error::UnknownAirport {
            detail: Some("Please enter valid 'from' and 'to' airports.".to_string()),
        };
        assert!(err.to_string().starts_with("invalid or unknown airport code(s): "));
        assert!(err.to_string().contains("valid 'from' and 'to'"));
    }

    #[test]
    fn unknown_airport_without_detail_stays_brief() {
        let err = Error::UnknownAirport { detail: None };
        assert_eq!(err.to_string(), "invalid or unknown airport code(s)");
    }

    #[test]
    fn missing_fields_are_named() {
        let err = Error::MissingFields {
            fields: vec!["kilometers".to_string(), "miles".to_string()],
        };
        assert!(err.to_string().contains("kilometers, miles"));
    }

    #[test]
    fn unexpected_status_names_the_code() {
        let err = Error::UnexpectedStatus { status: 418 };
        assert_eq!(err.to_string(), "unexpected upstream status: 418");
    }
}
