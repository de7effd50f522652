pub mod env;

pub use env::{EnvSource, ProcessEnv};
