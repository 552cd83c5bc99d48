use crate::{env_optional, env_or_default, ConfigError, FromEnv};
use std::net::Ipv4Addr;

/// How the process receives requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServerRuntime {
    /// Bind a TCP listener on `host:port`.
    Http,
    /// Poll the AWS Lambda runtime API for API Gateway events.
    Lambda,
}

/// Server configuration for HTTP APIs
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub runtime: ServerRuntime,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self {
            host,
            port,
            runtime: ServerRuntime::Http,
        }
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_lambda(&self) -> bool {
        self.runtime == ServerRuntime::Lambda
    }
}

impl FromEnv for ServerConfig {
    /// Reads from environment variables with sensible defaults:
    /// - HOST: defaults to 0.0.0.0
    /// - PORT: defaults to 8080
    /// - AWS_LAMBDA_RUNTIME_API: set by Lambda; switches the runtime to [`ServerRuntime::Lambda`]
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_or_default("PORT", "8080")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "PORT".to_string(),
                details: format!("{}", e),
            })?;
        let runtime = match env_optional("AWS_LAMBDA_RUNTIME_API") {
            Some(_) => ServerRuntime::Lambda,
            None => ServerRuntime::Http,
        };

        Ok(Self {
            host,
            port,
            runtime,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED.to_string(), 8080)
    }
}
