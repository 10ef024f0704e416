#![allow(dead_code)]

use serde_json::{json, Value};

pub const RIDER: &str = "grace.hopper@example.com";
pub const REFERENCE: &str = "c6af9ac6-7b61-11e6-9a41-93e8deadbeef";

pub fn pickup_body(latitude: f64, longitude: f64) -> String {
    json!({"PickupLocation": {"Latitude": latitude, "Longitude": longitude}}).to_string()
}

/// API Gateway proxy event as delivered behind a Cognito user pool authorizer.
pub fn authorized_event(body: &str, username: &str) -> Value {
    json!({
        "resource": "/ride",
        "path": "/ride",
        "httpMethod": "POST",
        "headers": {"Content-Type": "application/json"},
        "body": body,
        "isBase64Encoded": false,
        "requestContext": {
            "accountId": "123456789012",
            "apiId": "1234",
            "stage": "prod",
            "requestId": "gateway-request-id",
            "authorizer": {
                "claims": {
                    "cognito:username": username,
                    "email": username,
                },
            },
        },
    })
}

pub fn unauthorized_event(body: &str) -> Value {
    json!({
        "resource": "/ride",
        "path": "/ride",
        "httpMethod": "POST",
        "body": body,
        "requestContext": {
            "accountId": "123456789012",
            "apiId": "1234",
        },
    })
}
