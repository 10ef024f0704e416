use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Fixed pickup ETA quoted to every rider.
pub const DEFAULT_ETA: &str = "30 seconds";
/// Claim carrying the authenticated username, as issued by a Cognito user pool.
pub const USERNAME_CLAIM: &str = "cognito:username";
/// Fallback error text for failures that render no message.
pub const GENERIC_ERROR_MESSAGE: &str = "any error";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct PickupLocation {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RideRequest {
    pub pickup_location: PickupLocation,
}

impl RideRequest {
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// A member of the fleet. Values only ever come from [`crate::fleet::FLEET`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub struct Unicorn {
    pub name: &'static str,
    pub color: &'static str,
    pub gender: &'static str,
}

/// Durable row written once per booked ride.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RideRecord {
    pub ride_id: String,
    pub user: String,
    pub unicorn: Unicorn,
    pub request_time: String,
}

impl RideRecord {
    pub fn new(
        ride_id: impl Into<String>,
        user: impl Into<String>,
        unicorn: Unicorn,
        requested_at: DateTime<Utc>,
    ) -> Self {
        Self {
            ride_id: ride_id.into(),
            user: user.into(),
            unicorn,
            request_time: iso_timestamp(requested_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RideCreatedResponse {
    pub ride_id: String,
    pub unicorn: Unicorn,
    pub eta: String,
    pub rider: String,
}

impl RideCreatedResponse {
    pub fn for_record(record: &RideRecord) -> Self {
        Self {
            ride_id: record.ride_id.clone(),
            unicorn: record.unicorn,
            eta: DEFAULT_ETA.to_string(),
            rider: record.user.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    pub error: String,
    pub reference: String,
}

impl ErrorResponse {
    /// Builds the error body, substituting [`GENERIC_ERROR_MESSAGE`] for a blank message.
    pub fn new(message: impl Into<String>, reference: impl Into<String>) -> Self {
        let message = message.into();
        let error = if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        Self {
            error,
            reference: reference.into(),
        }
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2026-10-18T09:30:00.123Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
