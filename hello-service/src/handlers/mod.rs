pub mod health;
pub mod hello;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use hello::{hello, hello_world, runtime_info};
