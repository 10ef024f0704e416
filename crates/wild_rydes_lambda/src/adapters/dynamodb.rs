use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;
use wild_rydes_core::contract::{RideRecord, Unicorn};

use crate::adapters::ride_store::{RideStore, StoreError};
use crate::config::HandlerConfig;

/// Ride store backed by a DynamoDB table with `RideId` as its hash key.
#[derive(Debug, Clone)]
pub struct DynamoRideStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoRideStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Builds the shared client from the default AWS provider chain.
    pub async fn from_config(config: &HandlerConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;

        Self::new(
            aws_sdk_dynamodb::Client::new(&sdk_config),
            config.table_name.clone(),
        )
    }

    pub fn client(&self) -> &aws_sdk_dynamodb::Client {
        &self.client
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl RideStore for DynamoRideStore {
    async fn put_ride(&self, record: &RideRecord) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(ride_item(record)))
            .send()
            .await
            .map(|_| ())
            .map_err(|error| {
                StoreError::new(format!(
                    "failed to put ride record: {}",
                    DisplayErrorContext(&error)
                ))
            })
    }
}

pub fn ride_item(record: &RideRecord) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            "RideId".to_string(),
            AttributeValue::S(record.ride_id.clone()),
        ),
        ("User".to_string(), AttributeValue::S(record.user.clone())),
        ("Unicorn".to_string(), unicorn_attribute(&record.unicorn)),
        (
            "RequestTime".to_string(),
            AttributeValue::S(record.request_time.clone()),
        ),
    ])
}

fn unicorn_attribute(unicorn: &Unicorn) -> AttributeValue {
    AttributeValue::M(HashMap::from([
        ("Name".to_string(), AttributeValue::S(unicorn.name.to_string())),
        (
            "Color".to_string(),
            AttributeValue::S(unicorn.color.to_string()),
        ),
        (
            "Gender".to_string(),
            AttributeValue::S(unicorn.gender.to_string()),
        ),
    ]))
}
