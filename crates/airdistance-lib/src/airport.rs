//! Airport code types and the distance lookup model.
//!
//! [`AirportCode`] enforces the IATA shape (three ASCII letters, stored
//! uppercase); [`DistanceQuery`] pairs two distinct codes and carries the
//! full validation sequence for raw form input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A validated three-letter IATA airport code, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AirportCode(String);

impl AirportCode {
    /// Normalize and validate a single raw code.
    ///
    /// Trims surrounding whitespace and uppercases the result, so
    /// `"  lax "` parses to `LAX` and re-parsing `LAX` is a no-op.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.chars().count() != 3 {
            return Err(Error::validation("code must be exactly 3 characters"));
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::validation("codes may only contain letters"));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered origin/destination pair of distinct airport codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceQuery {
    origin: AirportCode,
    destination: AirportCode,
}

impl DistanceQuery {
    /// Run the full validation sequence over two raw form values.
    ///
    /// The rules short-circuit, first failing rule wins, and each rule is
    /// applied to both values before moving on:
    ///
    /// 1. both present and non-empty after trimming
    /// 2. each exactly 3 characters
    /// 3. each alphabetic only
    /// 4. uppercased origin differs from uppercased destination
    pub fn parse(origin: &str, destination: &str) -> Result<Self> {
        let origin_raw = origin.trim();
        let destination_raw = destination.trim();

        if origin_raw.is_empty() || destination_raw.is_empty() {
            return Err(Error::validation("both codes required"));
        }
        if origin_raw.chars().count() != 3 || destination_raw.chars().count() != 3 {
            return Err(Error::validation("code must be exactly 3 characters"));
        }
        let alphabetic = |s: &str| s.chars().all(|c| c.is_ascii_alphabetic());
        if !alphabetic(origin_raw) || !alphabetic(destination_raw) {
            return Err(Error::validation("codes may only contain letters"));
        }

        let origin = AirportCode::parse(origin_raw)?;
        let destination = AirportCode::parse(destination_raw)?;
        if origin == destination {
            return Err(Error::validation("origin and destination must differ"));
        }

        Ok(Self {
            origin,
            destination,
        })
    }

    pub fn origin(&self) -> &AirportCode {
        &self.origin
    }

    pub fn destination(&self) -> &AirportCode {
        &self.destination
    }
}

impl fmt::Display for DistanceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

/// Descriptor for one airport as reported by the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    /// The normalized IATA code the lookup was made with.
    pub code: AirportCode,
    pub name: String,
    pub city: String,
    pub country: String,
}

/// Normalized outcome of a successful distance lookup.
///
/// Distances are reported rounded to the nearest integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceResult {
    pub origin: Airport,
    pub destination: Airport,
    pub kilometers: i64,
    pub miles: i64,
    pub nautical_miles: i64,
}
