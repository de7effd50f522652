//! Environment lookups used by request handlers.
//!
//! Handlers resolve their values on every request, so they go through an
//! `EnvSource` held in `AppState` rather than touching the process
//! environment directly. Production uses `ProcessEnv`; tests use a map.

use std::collections::HashMap;

pub trait EnvSource: Send + Sync {
    /// Value of `key`, or `None` when unset. An empty value is still `Some`.
    fn get(&self, key: &str) -> Option<String>;

    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

/// Reads the live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        service_core::config::lookup_env(key)
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_source_falls_back_only_when_unset() {
        let env: HashMap<String, String> = [
            ("present".to_string(), "value".to_string()),
            ("empty".to_string(), String::new()),
        ]
        .into();

        assert_eq!(env.get_or("present", "default"), "value");
        assert_eq!(env.get_or("empty", "default"), "");
        assert_eq!(env.get_or("missing", "default"), "default");
    }
}
