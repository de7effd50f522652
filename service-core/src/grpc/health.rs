//! `grpc.health.v1.Health` support built on `tonic-health`.

use std::sync::Arc;
use tokio::sync::RwLock;
use tonic_health::server::HealthReporter as TonicHealthReporter;

/// Serving state reported for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Serving,
    NotServing,
    Unknown,
}

impl From<HealthStatus> for tonic_health::ServingStatus {
    fn from(status: HealthStatus) -> Self {
        match status {
            HealthStatus::Serving => tonic_health::ServingStatus::Serving,
            HealthStatus::NotServing => tonic_health::ServingStatus::NotServing,
            HealthStatus::Unknown => tonic_health::ServingStatus::Unknown,
        }
    }
}

/// Cloneable handle that updates the health status of one named service.
#[derive(Clone)]
pub struct HealthReporter {
    inner: Arc<RwLock<TonicHealthReporter>>,
    service_name: String,
}

impl HealthReporter {
    pub fn new(reporter: TonicHealthReporter, service_name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(reporter)),
            service_name: service_name.into(),
        }
    }

    /// Fully-qualified service name this reporter updates, e.g. `echospec.Echo`.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub async fn set_status(&self, status: HealthStatus) {
        let mut reporter = self.inner.write().await;
        reporter
            .set_service_status(&self.service_name, status.into())
            .await;
        tracing::debug!(service = %self.service_name, ?status, "Health status updated");
    }

    pub async fn set_serving(&self) {
        self.set_status(HealthStatus::Serving).await;
    }

    pub async fn set_not_serving(&self) {
        self.set_status(HealthStatus::NotServing).await;
    }
}

/// Health server to mount on the router, plus the reporter that drives it.
pub struct HealthComponents<S> {
    pub server: tonic_health::pb::health_server::HealthServer<S>,
    pub reporter: HealthReporter,
}

/// Build the health service for `service_name`, initially `SERVING`.
///
/// ```ignore
/// let health = create_health_service("echospec.Echo").await;
/// Server::builder()
///     .add_service(health.server)
///     .add_service(EchoServer::new(service))
///     .serve(addr)
///     .await?;
/// ```
pub async fn create_health_service(
    service_name: impl Into<String>,
) -> HealthComponents<impl tonic_health::pb::health_server::Health> {
    let (reporter, server) = tonic_health::server::health_reporter();
    let reporter = HealthReporter::new(reporter, service_name);
    reporter.set_serving().await;

    HealthComponents { server, reporter }
}
