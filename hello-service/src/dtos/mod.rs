use crate::config::{DEFAULT_SERVICE_NAME, DEFAULT_VERSION, SERVICE_NAME_VAR, VERSION_NUM_VAR};
use crate::services::EnvSource;
use serde::{Deserialize, Serialize};

/// Body of `/`: who is answering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceIdentity {
    pub service_name: String,
    pub version_num: String,
}

impl ServiceIdentity {
    /// Each field is looked up independently; unset fields take the default.
    pub fn resolve(env: &dyn EnvSource) -> Self {
        Self {
            service_name: env.get_or(SERVICE_NAME_VAR, DEFAULT_SERVICE_NAME),
            version_num: env.get_or(VERSION_NUM_VAR, DEFAULT_VERSION),
        }
    }
}

/// Body of `/runtime`. Keys are snake_case; unset variables are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeInfo {
    pub user_agent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_execution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,
}

impl RuntimeInfo {
    pub fn resolve(env: &dyn EnvSource) -> Self {
        Self {
            user_agent: Self::user_agent(),
            hostname: env.get("HOSTNAME"),
            aws_execution: env.get("AWS_EXECUTION_ENV"),
            aws_region: env.get("AWS_REGION"),
        }
    }

    /// `<crate>/<version> <os> <arch>`, e.g. `hello-service/0.1.0 linux x86_64`.
    pub fn user_agent() -> String {
        format!(
            "{}/{} {} {}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH
        )
    }
}
