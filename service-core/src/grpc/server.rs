//! gRPC server builder utilities.

use std::time::Duration;

use tonic::transport::Server;
use tonic_reflection::server::Builder as ReflectionBuilder;

/// Builder for a tonic server with the settings shared by our services.
pub struct GrpcServerBuilder {
    service_name: String,
    http2_keepalive_interval: Duration,
    http2_keepalive_timeout: Duration,
}

impl GrpcServerBuilder {
    /// Keepalive pings every 30s, dropping the connection after 10s of silence.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            http2_keepalive_interval: Duration::from_secs(30),
            http2_keepalive_timeout: Duration::from_secs(10),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Build the tonic `Server`. Every request runs inside a `grpc` span
    /// carrying the service name and the request path.
    pub fn build_server(&self) -> Server {
        let service = self.service_name.clone();
        Server::builder()
            .http2_keepalive_interval(Some(self.http2_keepalive_interval))
            .http2_keepalive_timeout(Some(self.http2_keepalive_timeout))
            .trace_fn(move |req| {
                tracing::info_span!("grpc", service = %service, path = %req.uri().path())
            })
    }
}

/// Build a v1 reflection service from encoded file descriptor sets.
///
/// ```ignore
/// let reflection = create_reflection_service(&[proto::FILE_DESCRIPTOR_SET])?;
/// ```
pub fn create_reflection_service(
    file_descriptor_sets: &[&[u8]],
) -> Result<
    tonic_reflection::server::ServerReflectionServer<
        impl tonic_reflection::server::ServerReflection,
    >,
    tonic_reflection::server::Error,
> {
    let mut builder = ReflectionBuilder::configure();

    for fds in file_descriptor_sets {
        builder = builder.register_encoded_file_descriptor_set(fds);
    }

    builder.build_v1()
}
