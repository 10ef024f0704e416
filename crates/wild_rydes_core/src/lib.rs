//! Ride booking domain primitives.
//!
//! This crate owns the fleet, ride identifiers, and the request/record/response
//! contracts. It intentionally excludes AWS SDK and Lambda runtime concerns.

pub mod contract;
pub mod error;
pub mod fleet;
pub mod ride_id;
