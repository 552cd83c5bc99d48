use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_or_default, server::ServerConfig};
use std::str::FromStr;

// Import DynamoDB config from the database library
use database::dynamodb::DynamoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Where items are kept
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    /// The DynamoDB table named by `DYNAMODB_TABLE_NAME`
    DynamoDb,
    /// Process memory; lost on restart, for local runs only
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dynamodb" => Ok(StorageBackend::DynamoDb),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::ParseError {
                key: "ITEMS_STORAGE_BACKEND".to_string(),
                details: format!("expected 'dynamodb' or 'memory', got '{}'", other),
            }),
        }
    }
}

impl FromEnv for StorageBackend {
    fn from_env() -> Result<Self, ConfigError> {
        env_or_default("ITEMS_STORAGE_BACKEND", "dynamodb").parse()
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub dynamodb: DynamoConfig,
    pub storage: StorageBackend,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let dynamodb = DynamoConfig::from_env()?; // Defaults to http-crud-tutorial-items
        let storage = StorageBackend::from_env()?;
        let server = ServerConfig::from_env()?; // Uses defaults: HOST=0.0.0.0, PORT=8080

        Ok(Self {
            app: app_info!(),
            dynamodb,
            storage,
            server,
            environment,
        })
    }
}
