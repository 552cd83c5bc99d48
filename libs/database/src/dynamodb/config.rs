#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_optional, env_or_default};

/// Table used when `DYNAMODB_TABLE_NAME` is not set.
pub const DEFAULT_TABLE_NAME: &str = "http-crud-tutorial-items";

/// DynamoDB connection configuration
///
/// Credentials are never part of this struct; they are resolved by the AWS
/// default provider chain (environment, profile, IMDS, Lambda role).
///
/// # Example
///
/// ```ignore
/// use database::dynamodb::DynamoConfig;
///
/// // Real AWS, region from the default chain
/// let config = DynamoConfig::new("items");
///
/// // DynamoDB Local
/// let config = DynamoConfig::new("items")
///     .with_endpoint_url("http://localhost:8000")
///     .with_region("us-east-1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DynamoConfig {
    /// Name of the table holding the items
    pub table_name: String,

    /// Optional endpoint override (DynamoDB Local, LocalStack)
    pub endpoint_url: Option<String>,

    /// Optional region override
    pub region: Option<String>,
}

impl DynamoConfig {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            endpoint_url: None,
            region: None,
        }
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

impl Default for DynamoConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_NAME)
    }
}

/// Load DynamoConfig from environment variables
///
/// Environment variables:
/// - `DYNAMODB_TABLE_NAME` (optional, default: `http-crud-tutorial-items`)
/// - `DYNAMODB_ENDPOINT_URL` (optional) - endpoint override
/// - `AWS_REGION` (optional) - region override
#[cfg(feature = "config")]
impl FromEnv for DynamoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let table_name = env_or_default("DYNAMODB_TABLE_NAME", DEFAULT_TABLE_NAME);
        if table_name.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "DYNAMODB_TABLE_NAME".to_string(),
                details: "table name cannot be empty".to_string(),
            });
        }

        Ok(Self {
            table_name,
            endpoint_url: env_optional("DYNAMODB_ENDPOINT_URL"),
            region: env_optional("AWS_REGION"),
        })
    }
}
