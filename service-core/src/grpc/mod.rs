//! gRPC utilities shared by gRPC-facing services.
//!
//! - Server builder with keepalive and per-request tracing spans
//! - Reflection service construction
//! - Health service wrapper with a cloneable status reporter
//! - Trace context interceptor for incoming requests

pub mod health;
pub mod interceptors;
pub mod server;

pub use health::{create_health_service, HealthComponents, HealthReporter, HealthStatus};
pub use interceptors::{
    extract_request_id, extract_traceparent, trace_context_interceptor, REQUEST_ID_KEY,
    TRACEPARENT_KEY, TRACESTATE_KEY,
};
pub use server::{create_reflection_service, GrpcServerBuilder};

// Re-export commonly used tonic types
pub use tonic::{Code, Request, Response, Status};
