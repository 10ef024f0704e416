use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use wild_rydes_core::contract::RideRecord;

use crate::adapters::ride_store::{RideStore, StoreError};

/// In-process ride store keyed by ride id, for tests and local runs.
#[derive(Debug, Default)]
pub struct MemoryRideStore {
    rides: Mutex<HashMap<String, RideRecord>>,
    failure: Option<String>,
}

impl MemoryRideStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every write fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            rides: Mutex::new(HashMap::new()),
            failure: Some(message.into()),
        }
    }

    pub fn get(&self, ride_id: &str) -> Option<RideRecord> {
        self.rides
            .lock()
            .expect("poisoned mutex")
            .get(ride_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rides.lock().expect("poisoned mutex").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RideStore for MemoryRideStore {
    async fn put_ride(&self, record: &RideRecord) -> Result<(), StoreError> {
        if let Some(message) = &self.failure {
            return Err(StoreError::new(message.clone()));
        }

        self.rides
            .lock()
            .expect("poisoned mutex")
            .insert(record.ride_id.clone(), record.clone());
        Ok(())
    }
}
