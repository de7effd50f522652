//! service-core: Shared infrastructure for the echo and hello services.
pub mod config;
pub mod error;
pub mod grpc;
pub mod middleware;
pub mod observability;
pub mod shutdown;
