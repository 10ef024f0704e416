use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use wild_rydes_lambda::adapters::dynamodb::DynamoRideStore;
use wild_rydes_lambda::config::HandlerConfig;
use wild_rydes_lambda::handlers::request_unicorn::{ApiGatewayResponse, RideBookingHandler};
use wild_rydes_lambda::logging::{init_logging, LogFormat};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging(LogFormat::from_env());

    let config = HandlerConfig::from_env()?;
    let store = DynamoRideStore::from_config(&config).await;
    tracing::info!(table_name = store.table_name(), "ride_store_ready");

    let handler = RideBookingHandler::new(store);
    let handler = &handler;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        let response = handler
            .handle(event.payload, &event.context.request_id)
            .await;
        Ok::<ApiGatewayResponse, Error>(response)
    }))
    .await
}
