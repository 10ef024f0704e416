//! AWS-oriented adapters and handlers for ride booking.
//!
//! This crate owns runtime integration details (the Lambda handler, the
//! DynamoDB ride store, configuration and logging). Domain contracts live in
//! `wild_rydes_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
pub mod logging;
