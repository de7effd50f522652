//! Application startup and lifecycle management.
//!
//! The echo service exposes a single gRPC listener carrying the echo service,
//! the standard health service and server reflection.

use crate::config::EchoConfig;
use crate::grpc::{
    proto::{echo_server::EchoServer, FILE_DESCRIPTOR_SET},
    EchoGrpcService, ECHO_SERVICE_NAME,
};
use crate::services::MonotonicClock;
use service_core::error::AppError;
use service_core::grpc::{
    create_health_service, create_reflection_service, trace_context_interceptor,
    GrpcServerBuilder,
};
use service_core::shutdown::shutdown_signal;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<EchoConfig>,
    pub clock: Arc<MonotonicClock>,
}

impl AppState {
    pub fn new(config: EchoConfig) -> Self {
        Self {
            config: Arc::new(config),
            clock: Arc::new(MonotonicClock::system()),
        }
    }
}

/// Application container for managing server lifecycle.
pub struct Application {
    grpc_port: u16,
    grpc_listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Bind the gRPC listener. Fails with `AppError::BindError` when the
    /// address is unavailable; there is no retry.
    pub async fn build(config: EchoConfig) -> Result<Self, AppError> {
        let grpc_addr = config.server.bind_addr();
        let grpc_listener = TcpListener::bind(&grpc_addr).await.map_err(|e| {
            tracing::error!("Failed to bind gRPC listener to {}: {}", grpc_addr, e);
            AppError::bind(&grpc_addr, e)
        })?;
        let grpc_port = grpc_listener.local_addr()?.port();

        tracing::info!(
            port = grpc_port,
            suffix = %config.suffix(),
            "Echo service: gRPC on port {}",
            grpc_port
        );

        Ok(Self {
            grpc_port,
            grpc_listener,
            state: AppState::new(config),
        })
    }

    /// Get the gRPC port the server is listening on.
    pub fn grpc_port(&self) -> u16 {
        self.grpc_port
    }

    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run_until_stopped(self) -> Result<(), AppError> {
        self.run_with_shutdown(shutdown_signal()).await
    }

    /// Serve until `signal` resolves, then drain in-flight calls.
    pub async fn run_with_shutdown<F>(self, signal: F) -> Result<(), AppError>
    where
        F: Future<Output = ()> + Send,
    {
        let builder = GrpcServerBuilder::new(self.state.config.service_name.clone());

        let health = create_health_service(ECHO_SERVICE_NAME).await;
        let health_reporter = health.reporter.clone();
        let reflection_service =
            create_reflection_service(&[FILE_DESCRIPTOR_SET]).map_err(|e| {
                AppError::ServerError(anyhow::anyhow!(
                    "Failed to build reflection service: {}",
                    e
                ))
            })?;

        let shutdown = async move {
            signal.await;
            health_reporter.set_not_serving().await;
        };

        let incoming = TcpListenerStream::new(self.grpc_listener);
        builder
            .build_server()
            .layer(tonic::service::interceptor(trace_context_interceptor))
            .add_service(health.server)
            .add_service(reflection_service)
            .add_service(EchoServer::new(EchoGrpcService::new(self.state)))
            .serve_with_incoming_shutdown(incoming, shutdown)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "gRPC server error");
                AppError::ServerError(e.into())
            })?;

        tracing::info!("Echo service stopped");
        Ok(())
    }
}
