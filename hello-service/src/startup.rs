//! Application startup and lifecycle management.

use crate::config::HelloConfig;
use crate::handlers::{
    health_check, hello, hello_world, metrics_endpoint, readiness_check, runtime_info,
};
use crate::services::{EnvSource, ProcessEnv};
use axum::{
    middleware,
    routing::{any, get},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics_middleware, request_id_middleware};
use service_core::observability::init_metrics;
use service_core::shutdown::shutdown_signal;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<HelloConfig>,
    pub env: Arc<dyn EnvSource>,
}

impl AppState {
    pub fn new(config: HelloConfig, env: Arc<dyn EnvSource>) -> Self {
        Self {
            config: Arc::new(config),
            env,
        }
    }
}

/// Build the HTTP router.
///
/// `/` answers every method; everything else is a plain GET.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(hello))
        .route("/hello-world", get(hello_world))
        .route("/runtime", get(runtime_info))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_endpoint))
        .route_layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    http_port: u16,
    http_listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Bind the HTTP listener, reading identity values from the process
    /// environment on each request.
    pub async fn build(config: HelloConfig) -> Result<Self, AppError> {
        Self::build_with_env(config, Arc::new(ProcessEnv)).await
    }

    pub async fn build_with_env(
        config: HelloConfig,
        env: Arc<dyn EnvSource>,
    ) -> Result<Self, AppError> {
        if !init_metrics() {
            tracing::warn!("Metrics recorder unavailable, /metrics will be empty");
        }

        // Port 0 = random port for testing
        let http_addr = config.bind_addr();
        let http_listener = TcpListener::bind(&http_addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", http_addr, e);
            AppError::bind(&http_addr, e)
        })?;
        let http_port = http_listener.local_addr()?.port();

        tracing::info!("Hello service: HTTP on port {}", http_port);

        Ok(Self {
            http_port,
            http_listener,
            state: AppState::new(config, env),
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn http_port(&self) -> u16 {
        self.http_port
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run_until_stopped(self) -> Result<(), AppError> {
        self.run_with_shutdown(shutdown_signal()).await
    }

    /// Serve until `signal` resolves, then drain in-flight requests.
    pub async fn run_with_shutdown<F>(self, signal: F) -> Result<(), AppError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state);

        axum::serve(self.http_listener, router)
            .with_graceful_shutdown(signal)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "HTTP server error");
                AppError::ServerError(e.into())
            })?;

        tracing::info!("Hello service stopped");
        Ok(())
    }
}
