use std::collections::HashMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, error, info};
use wild_rydes_core::contract::{
    ErrorResponse, RideCreatedResponse, RideRecord, RideRequest, USERNAME_CLAIM,
};
use wild_rydes_core::error::RideError;
use wild_rydes_core::fleet::find_unicorn;
use wild_rydes_core::ride_id::generate_ride_id;

use crate::adapters::ride_store::RideStore;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// The parts of an API Gateway proxy event the booking flow reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    #[serde(default)]
    pub body: Value,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub authorizer: Option<Authorizer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Authorizer {
    #[serde(default)]
    pub claims: HashMap<String, Value>,
}

impl Authorizer {
    pub fn username(&self) -> Option<&str> {
        self.claims
            .get(USERNAME_CLAIM)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }
}

impl ProxyEvent {
    /// Proxy integrations deliver the body as a raw string; direct invokes may
    /// pass an object.
    pub fn ride_request(&self) -> Result<RideRequest, serde_json::Error> {
        match &self.body {
            Value::String(text) => RideRequest::from_body(text),
            Value::Null => RideRequest::from_body(""),
            other => RideRequest::deserialize(other),
        }
    }
}

/// Books a ride per invocation against a shared store.
#[derive(Debug)]
pub struct RideBookingHandler<S> {
    store: S,
}

impl<S: RideStore> RideBookingHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Always yields a response; `reference` is echoed on errors.
    pub async fn handle(&self, event: Value, reference: &str) -> ApiGatewayResponse {
        match self.book_ride(&event).await {
            Ok(created) => json_response(201, &created, reference),
            Err(failure) => {
                if failure.is_unauthorized() {
                    error!(reference, "authorization_not_configured");
                } else {
                    error!(reference, error = %failure, "ride_request_failed");
                }
                let payload = ErrorResponse::new(failure.to_string(), reference);
                json_response(500, &payload, reference)
            }
        }
    }

    async fn book_ride(
        &self,
        raw_event: &Value,
    ) -> wild_rydes_core::error::Result<RideCreatedResponse> {
        if !has_authorizer(raw_event) {
            return Err(RideError::Unauthorized);
        }

        let event = ProxyEvent::deserialize(raw_event)?;
        let Some(authorizer) = event
            .request_context
            .as_ref()
            .and_then(|context| context.authorizer.as_ref())
        else {
            return Err(RideError::Unauthorized);
        };

        let ride_id = generate_ride_id();
        debug!(ride_id = %ride_id, event = %raw_event, "ride_request_received");

        let username = authorizer.username().ok_or(RideError::Unauthorized)?;
        let request = event.ride_request()?;
        let pickup = request.pickup_location;

        info!(
            latitude = pickup.latitude,
            longitude = pickup.longitude,
            "finding_unicorn"
        );
        let unicorn = *find_unicorn(&pickup);

        let record = RideRecord::new(ride_id, username, unicorn, Utc::now());
        self.store.put_ride(&record).await?;
        info!(
            ride_id = %record.ride_id,
            rider = %record.user,
            unicorn = record.unicorn.name,
            "ride_recorded"
        );

        Ok(RideCreatedResponse::for_record(&record))
    }
}

/// Identity context gate, checked before the rest of the event is parsed.
fn has_authorizer(raw_event: &Value) -> bool {
    raw_event
        .pointer("/requestContext/authorizer")
        .is_some_and(|authorizer| !authorizer.is_null())
}

fn response_headers() -> Value {
    json!({
        "Access-Control-Allow-Origin": "*",
        "Content-Type": "application/json",
    })
}

fn json_response(
    status_code: u16,
    payload: &impl Serialize,
    reference: &str,
) -> ApiGatewayResponse {
    match serde_json::to_string(payload) {
        Ok(body) => ApiGatewayResponse {
            status_code,
            headers: response_headers(),
            body,
        },
        Err(failure) => ApiGatewayResponse {
            status_code: 500,
            headers: response_headers(),
            body: json!({"Error": failure.to_string(), "Reference": reference}).to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use wild_rydes_core::fleet::FLEET;

    use super::*;
    use crate::adapters::ride_store::StoreError;

    struct CapturingStore {
        records: Mutex<Vec<RideRecord>>,
    }

    impl CapturingStore {
        fn new() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
            }
        }

        fn records(&self) -> Vec<RideRecord> {
            self.records.lock().expect("poisoned mutex").clone()
        }
    }

    #[async_trait]
    impl RideStore for CapturingStore {
        async fn put_ride(&self, record: &RideRecord) -> Result<(), StoreError> {
            self.records
                .lock()
                .expect("poisoned mutex")
                .push(record.clone());
            Ok(())
        }
    }

    fn event_with(body: Value, authorizer: Value) -> Value {
        json!({
            "httpMethod": "POST",
            "path": "/ride",
            "body": body,
            "requestContext": {
                "accountId": "123456789012",
                "apiId": "1234",
                "authorizer": authorizer,
            },
        })
    }

    fn body_json(response: &ApiGatewayResponse) -> Value {
        serde_json::from_str(&response.body).expect("response body should be JSON")
    }

    #[tokio::test]
    async fn books_ride_for_object_body() {
        let handler = RideBookingHandler::new(CapturingStore::new());
        let event = event_with(
            json!({"PickupLocation": {"Latitude": 1.1, "Longitude": 2.2}}),
            json!({"claims": {"cognito:username": "ada"}}),
        );

        let response = handler.handle(event, "req-1").await;

        assert_eq!(response.status_code, 201);
        let records = handler.store().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user, "ada");
        assert!(FLEET.contains(&records[0].unicorn));
        assert_eq!(body_json(&response)["RideId"], records[0].ride_id.as_str());
    }

    #[tokio::test]
    async fn null_authorizer_counts_as_unconfigured() {
        let handler = RideBookingHandler::new(CapturingStore::new());
        let event = event_with(
            Value::String(r#"{"PickupLocation":{"Latitude":1.1,"Longitude":2.2}}"#.to_string()),
            Value::Null,
        );

        let response = handler.handle(event, "req-2").await;

        assert_eq!(response.status_code, 500);
        assert_eq!(
            body_json(&response),
            json!({"Error": "Authorization not configured", "Reference": "req-2"})
        );
        assert!(handler.store().records().is_empty());
    }

    #[tokio::test]
    async fn null_request_context_counts_as_unconfigured() {
        let handler = RideBookingHandler::new(CapturingStore::new());
        let event = json!({
            "body": r#"{"PickupLocation":{"Latitude":1.1,"Longitude":2.2}}"#,
            "requestContext": null,
        });

        let response = handler.handle(event, "req-7").await;

        assert_eq!(response.status_code, 500);
        assert_eq!(
            body_json(&response),
            json!({"Error": "Authorization not configured", "Reference": "req-7"})
        );
        assert!(handler.store().records().is_empty());
    }

    #[tokio::test]
    async fn authorizer_is_checked_before_body_parsing() {
        let handler = RideBookingHandler::new(CapturingStore::new());
        let event = json!({"body": 42, "requestContext": {"apiId": "1234"}});

        let response = handler.handle(event, "req-8").await;

        assert_eq!(body_json(&response)["Error"], "Authorization not configured");
        assert!(handler.store().records().is_empty());
    }

    #[tokio::test]
    async fn missing_username_claim_is_rejected_without_writing() {
        let handler = RideBookingHandler::new(CapturingStore::new());
        let event = event_with(
            Value::String(r#"{"PickupLocation":{"Latitude":1.1,"Longitude":2.2}}"#.to_string()),
            json!({"claims": {"email": "ada@example.com"}}),
        );

        let response = handler.handle(event, "req-3").await;

        assert_eq!(response.status_code, 500);
        assert_eq!(body_json(&response)["Error"], "Authorization not configured");
        assert!(handler.store().records().is_empty());
    }

    #[tokio::test]
    async fn missing_body_is_a_malformed_request() {
        let handler = RideBookingHandler::new(CapturingStore::new());
        let event = event_with(Value::Null, json!({"claims": {"cognito:username": "ada"}}));

        let response = handler.handle(event, "req-4").await;

        assert_eq!(response.status_code, 500);
        let body = body_json(&response);
        assert!(!body["Error"].as_str().unwrap_or_default().is_empty());
        assert_eq!(body["Reference"], "req-4");
        assert!(handler.store().records().is_empty());
    }

    #[tokio::test]
    async fn non_object_event_is_reported_not_panicked() {
        let handler = RideBookingHandler::new(CapturingStore::new());

        let response = handler.handle(json!("not an event"), "req-5").await;

        assert_eq!(response.status_code, 500);
        assert_eq!(body_json(&response)["Reference"], "req-5");
    }

    #[test]
    fn every_response_allows_cross_origin_access() {
        let response = json_response(201, &json!({"ok": true}), "req-6");
        assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");

        let serialized = serde_json::to_value(&response).expect("serialize");
        assert_eq!(serialized["statusCode"], 201);
    }
}
