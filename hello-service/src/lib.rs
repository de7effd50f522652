//! Hello Service - HTTP responder describing the service identity.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;
