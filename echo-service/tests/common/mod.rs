//! Common test utilities for echo-service integration tests.

#![allow(dead_code)]

use echo_service::config::{EchoConfig, ServerConfig};
use echo_service::grpc::proto::echo_client::EchoClient;
use echo_service::startup::Application;
use std::sync::Once;
use std::time::Duration;
use tonic::transport::Channel;

static INIT: Once = Once::new();

/// Initialize tracing for tests (only once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("info,echo_service=debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub fn test_config(execution_env: Option<&str>) -> EchoConfig {
    EchoConfig {
        service_name: "echo-service-test".to_string(),
        log_level: "debug".to_string(),
        otlp_endpoint: None,
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        execution_env: execution_env.map(str::to_string),
    }
}

/// Spawn the application on a random port and return its gRPC address.
pub async fn spawn_app(execution_env: Option<&str>) -> String {
    init_tracing();

    let app = Application::build(test_config(execution_env))
        .await
        .expect("Failed to build application");
    let addr = format!("http://127.0.0.1:{}", app.grpc_port());

    tokio::spawn(async move {
        app.run_with_shutdown(std::future::pending()).await.ok();
    });

    addr
}

/// Connect to a gRPC address, retrying while the server comes up.
pub async fn connect(addr: &str) -> Channel {
    let mut attempts = 0;
    loop {
        match Channel::from_shared(addr.to_string())
            .expect("valid uri")
            .connect()
            .await
        {
            Ok(channel) => break channel,
            Err(_) if attempts < 20 => {
                attempts += 1;
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            Err(e) => panic!("Failed to connect to {} after 20 attempts: {}", addr, e),
        }
    }
}

pub async fn echo_client(addr: &str) -> EchoClient<Channel> {
    EchoClient::new(connect(addr).await)
}
