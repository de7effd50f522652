//! Configuration module for echo-service.
//!
//! Everything is resolved once at startup. Handlers receive the resulting
//! `EchoConfig` through `AppState` and never read the environment themselves.

use service_core::config::{env_or, lookup_env, parse_env_or};
use service_core::error::AppError;

/// Port used when `SERVER_PORT` is unset.
pub const DEFAULT_SERVER_PORT: u16 = 50051;

/// Variable whose value is appended to every echoed message.
pub const EXECUTION_ENV_VAR: &str = "AWS_EXECUTION_ENV";

#[derive(Debug, Clone)]
pub struct EchoConfig {
    pub service_name: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub server: ServerConfig,
    /// Execution environment tag, e.g. `AWS_ECS_FARGATE`.
    pub execution_env: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_SERVER_PORT,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl EchoConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            service_name: env_or("SERVICE_NAME", "echo-service"),
            log_level: env_or("LOG_LEVEL", "info"),
            otlp_endpoint: lookup_env("OTLP_ENDPOINT"),
            server: ServerConfig {
                // Must be a port number. An empty value is rejected rather
                // than binding an OS-assigned port.
                port: parse_env_or("SERVER_PORT", DEFAULT_SERVER_PORT)?,
                ..ServerConfig::default()
            },
            execution_env: lookup_env(EXECUTION_ENV_VAR),
        })
    }

    /// Text appended to echoed messages; empty when no tag was found.
    pub fn suffix(&self) -> &str {
        self.execution_env.as_deref().unwrap_or_default()
    }
}
