//! Echo Service - gRPC echo responder tagged with the execution environment.

pub mod config;
pub mod grpc;
pub mod services;
pub mod startup;
