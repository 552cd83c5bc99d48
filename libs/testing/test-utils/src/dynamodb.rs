//! DynamoDB test infrastructure
//!
//! Provides a `TestDynamoTable` helper that starts DynamoDB Local and creates a
//! table keyed by the string attribute `id`.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use testcontainers::ContainerAsync;
use testcontainers::runners::AsyncRunner;
use testcontainers_modules::dynamodb_local::DynamoDb;

const DYNAMODB_LOCAL_PORT: u16 = 8000;

/// DynamoDB Local table wrapper that ensures proper cleanup
///
/// The container is automatically stopped and removed when this struct is dropped.
///
/// # Example
///
/// ```no_run
/// use test_utils::TestDynamoTable;
///
/// # async fn example() {
/// let table = TestDynamoTable::new("items").await;
/// let client = table.client();
///
/// // Pass client and table.table_name() to your repository
/// # }
/// ```
pub struct TestDynamoTable {
    #[allow(dead_code)]
    container: ContainerAsync<DynamoDb>,
    client: Client,
    table_name: String,
    pub endpoint_url: String,
}

impl TestDynamoTable {
    /// Start DynamoDB Local and create `table_name` with partition key `id` (S)
    pub async fn new(table_name: &str) -> Self {
        let container = DynamoDb::default()
            .start()
            .await
            .expect("Failed to start DynamoDB Local container");

        let host_port = container
            .get_host_port_ipv4(DYNAMODB_LOCAL_PORT)
            .await
            .expect("Failed to get DynamoDB Local port");

        let endpoint_url = format!("http://127.0.0.1:{}", host_port);

        // DynamoDB Local accepts any static credentials
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .endpoint_url(&endpoint_url)
            .credentials_provider(Credentials::new("test", "test", None, None, "test-utils"))
            .load()
            .await;
        let client = Client::new(&sdk_config);

        client
            .create_table()
            .table_name(table_name)
            .key_schema(
                KeySchemaElement::builder()
                    .attribute_name("id")
                    .key_type(KeyType::Hash)
                    .build()
                    .expect("Invalid key schema"),
            )
            .attribute_definitions(
                AttributeDefinition::builder()
                    .attribute_name("id")
                    .attribute_type(ScalarAttributeType::S)
                    .build()
                    .expect("Invalid attribute definition"),
            )
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .expect("Failed to create test table");

        tracing::info!(port = host_port, table = table_name, "Test DynamoDB table ready");

        Self {
            container,
            client,
            table_name: table_name.to_string(),
            endpoint_url,
        }
    }

    /// Get a cloned client (useful for passing to repositories)
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Endpoint for `DYNAMODB_ENDPOINT_URL`-style configuration
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }
}

// Container is automatically cleaned up when TestDynamoTable is dropped
impl Drop for TestDynamoTable {
    fn drop(&mut self) {
        tracing::debug!(table = %self.table_name, "Cleaning up test DynamoDB container");
    }
}
