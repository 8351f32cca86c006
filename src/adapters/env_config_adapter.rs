//! Environment variable configuration adapter.

use std::sync::Arc;

use crate::ports::config_port::ConfigPort;

type Lookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Reads `<prefix><KEY>` from the process environment, or from any other
/// name-to-value lookup.
#[derive(Clone)]
pub struct EnvConfigAdapter {
    prefix: String,
    lookup: Lookup,
}

impl EnvConfigAdapter {
    pub fn with_prefix(prefix: &str) -> Self {
        Self::with_source(prefix, |name| std::env::var(name).ok())
    }

    pub fn with_source<F>(prefix: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        Self {
            prefix: prefix.to_string(),
            lookup: Arc::new(lookup),
        }
    }

    fn variable(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl ConfigPort for EnvConfigAdapter {
    fn get_string(&self, key: &str) -> Option<String> {
        (self.lookup)(&self.variable(key)).filter(|v| !v.trim().is_empty())
    }
}
