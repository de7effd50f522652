//! Common test utilities for hello-service integration tests.

#![allow(dead_code)]

use hello_service::config::HelloConfig;
use hello_service::services::EnvSource;
use hello_service::startup::{build_router, AppState, Application};
use service_core::config::Config as CommonConfig;
use std::collections::HashMap;
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,hello_service=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub fn test_config(port: u16) -> HelloConfig {
    HelloConfig {
        common: CommonConfig { port },
        host: "127.0.0.1".to_string(),
        service_name: "hello-service-test".to_string(),
        log_level: "debug".to_string(),
        otlp_endpoint: None,
    }
}

pub fn env(pairs: &[(&str, &str)]) -> Arc<dyn EnvSource> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Arc::new(map)
}

/// Router backed by a fixed environment, for `oneshot` tests.
pub fn router(pairs: &[(&str, &str)]) -> axum::Router {
    init_tracing();
    build_router(AppState::new(test_config(0), env(pairs)))
}

/// Spawn the application on a random port and return its base URL.
pub async fn spawn_app(env: Arc<dyn EnvSource>) -> String {
    init_tracing();

    let app = Application::build_with_env(test_config(0), env)
        .await
        .expect("Failed to build application");
    let base_url = format!("http://127.0.0.1:{}", app.http_port());

    tokio::spawn(async move {
        app.run_with_shutdown(std::future::pending()).await.ok();
    });

    base_url
}
