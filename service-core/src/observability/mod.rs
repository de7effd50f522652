pub mod logging;
pub mod metrics;

pub use logging::{init_tracing, shutdown_tracing};
pub use self::metrics::{init_metrics, render_metrics};
