//! Echo Service entry point.

use echo_service::config::EchoConfig;
use echo_service::startup::Application;
use service_core::observability::{init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = EchoConfig::from_env().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(
        &config.service_name,
        &config.log_level,
        config.otlp_endpoint.as_deref(),
    )
    .map_err(|e| {
        eprintln!("Failed to initialize tracing: {}", e);
        std::io::Error::other(format!("Tracing error: {}", e))
    })?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        service_name = %config.service_name,
        grpc_addr = %config.server.bind_addr(),
        execution_env = ?config.execution_env,
        "Starting echo-service"
    );

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to build application");
        std::io::Error::other(format!("Application build error: {}", e))
    })?;

    let result = app.run_until_stopped().await;
    shutdown_tracing();

    result.map_err(|e| {
        tracing::error!(error = %e, "Application error");
        std::io::Error::other(format!("Application error: {}", e))
    })?;

    tracing::info!("Service shutdown complete");
    Ok(())
}
