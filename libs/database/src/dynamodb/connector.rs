use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use tracing::info;

use super::DynamoConfig;

/// Build a DynamoDB client from configuration
///
/// Construction does not touch the network; the first request resolves
/// credentials. Build the client once at start-up and share it: `Client` is a
/// cheap handle over a shared connection pool.
///
/// # Example
/// ```ignore
/// use database::dynamodb::{DynamoConfig, connect};
///
/// let client = connect(&DynamoConfig::default()).await;
/// ```
pub async fn connect(config: &DynamoConfig) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }

    if let Some(endpoint_url) = &config.endpoint_url {
        info!(endpoint_url = %endpoint_url, "Using DynamoDB endpoint override");
        loader = loader.endpoint_url(endpoint_url);
    }

    let sdk_config = loader.load().await;
    info!(
        table = %config.table_name,
        region = ?sdk_config.region(),
        "DynamoDB client configured"
    );

    Client::new(&sdk_config)
}
