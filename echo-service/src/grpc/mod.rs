pub mod echo_service;

pub use echo_service::EchoGrpcService;

/// Include generated proto code.
pub mod proto {
    tonic::include_proto!("echospec");

    pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("echo_descriptor");
}

/// Fully-qualified gRPC name of the echo service, as reported by reflection
/// and used as the health check key.
pub const ECHO_SERVICE_NAME: &str =
    <proto::echo_server::EchoServer<EchoGrpcService> as tonic::server::NamedService>::NAME;
