use async_trait::async_trait;
use thiserror::Error;
use wild_rydes_core::contract::RideRecord;
use wild_rydes_core::error::RideError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<StoreError> for RideError {
    fn from(error: StoreError) -> Self {
        RideError::Persistence(error.message)
    }
}

/// Durable sink for booked rides. Writes are unconditional and never retried.
#[async_trait]
pub trait RideStore: Send + Sync {
    async fn put_ride(&self, record: &RideRecord) -> Result<(), StoreError>;
}
