use crate::dtos::{RuntimeInfo, ServiceIdentity};
use crate::startup::AppState;
use axum::{extract::State, Json};

/// `/` for any method. The request itself is never inspected.
pub async fn hello(State(state): State<AppState>) -> Json<ServiceIdentity> {
    let identity = ServiceIdentity::resolve(state.env.as_ref());
    tracing::debug!(
        service_name = %identity.service_name,
        version_num = %identity.version_num,
        "Serving identity"
    );
    Json(identity)
}

pub async fn hello_world(State(state): State<AppState>) -> String {
    let execution_env = state.env.get_or("AWS_EXECUTION_ENV", "unknown");
    format!("Hello world! I am Rust Application from AWS {}", execution_env)
}

pub async fn runtime_info(State(state): State<AppState>) -> Json<RuntimeInfo> {
    Json(RuntimeInfo::resolve(state.env.as_ref()))
}
