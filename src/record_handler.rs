use aws_config::BehaviorVersion;
use lambda_http::{run, service_fn, Error as LambdaError, Request as LambdaRequest};
use tracing::info;

use record_handler::common::HandlerConfig;
use record_handler::handler::RecordHandler;
use record_handler::store::DynamoRecordStore;

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time() // CloudWatch will add the ingestion time
        .with_target(false)
        .init();

    let config = HandlerConfig::from_env()?;
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let dynamo_client = aws_sdk_dynamodb::Client::new(&aws_config);
    let handler = RecordHandler::new(DynamoRecordStore::new(dynamo_client, &config));
    info!("Serving records from table: {}", handler.store().table_name());

    run(service_fn(|request: LambdaRequest| async {
        handler.handle(request).await.map_err(LambdaError::from)
    }))
    .await
}
