use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// HTTP listener port. `0` binds a random port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    8080
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Look up an environment variable, returning `None` when it is unset or not
/// valid unicode. A variable set to the empty string is returned as `Some("")`.
pub fn lookup_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Look up an environment variable, falling back to `default` when unset.
pub fn env_or(key: &str, default: &str) -> String {
    lookup_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse an optional environment variable into `T`, falling back to `default`
/// when unset. A value that does not parse is a configuration error.
pub fn parse_env_or<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup_env(key) {
        Some(raw) => raw.trim().parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("{} has invalid value '{}': {}", key, raw, e))
        }),
        None => Ok(default),
    }
}
