//! Configuration module for hello-service.

use service_core::config::{self as core_config, env_or, lookup_env};
use service_core::error::AppError;

/// Environment variable holding the reported service name.
pub const SERVICE_NAME_VAR: &str = "serviceName";
/// Environment variable holding the reported version.
pub const VERSION_NUM_VAR: &str = "versionNum";

pub const DEFAULT_SERVICE_NAME: &str = "mux";
pub const DEFAULT_VERSION: &str = "1.0";

#[derive(Debug, Clone)]
pub struct HelloConfig {
    /// HTTP port comes from `APP__PORT` (default 8080).
    pub common: core_config::Config,
    pub host: String,
    /// Name used for logs and traces, not the reported identity.
    pub service_name: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl HelloConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(Self {
            common,
            host: "0.0.0.0".to_string(),
            service_name: env_or("SERVICE_NAME", "hello-service"),
            log_level: env_or("LOG_LEVEL", "info"),
            otlp_endpoint: lookup_env("OTLP_ENDPOINT"),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.common.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    #[serial]
    fn binds_all_interfaces_on_8080_by_default() {
        env::remove_var("APP__PORT");

        let config = HelloConfig::from_env().unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    #[serial]
    fn port_can_be_overridden() {
        env::set_var("APP__PORT", "9090");

        let config = HelloConfig::from_env().unwrap();
        assert_eq!(config.common.port, 9090);

        env::remove_var("APP__PORT");
    }
}
