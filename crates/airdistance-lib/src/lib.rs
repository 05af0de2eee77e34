//! Airport distance lookup library entry points.
//!
//! This crate exposes the airport code types with their validation rules, the
//! AirportGap HTTP client, and the distance result model. Higher-level
//! consumers (the HTTP service) should only depend on the types exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod airport;
pub mod airportgap;
pub mod error;

pub use airport::{Airport, AirportCode, DistanceQuery, DistanceResult};
pub use airportgap::{AirportGapClient, DEFAULT_BASE_URL};
pub use error::{Error, Result};
