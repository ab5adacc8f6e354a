//! Classification service settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::model::LabelPolicy;

/// Default classification service URL.
pub const DEFAULT_SERVICE_URL: &str = "http://localhost:5000";

/// Default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach the classification service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL; endpoint paths are appended to it.
    pub base_url: String,

    /// Whole-request timeout.
    pub timeout_secs: u64,

    /// Strict rejects labels other than `phishing` / `legitimate`.
    pub label_policy: LabelPolicy,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVICE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            label_policy: LabelPolicy::default(),
        }
    }
}

impl ServiceConfig {
    /// Replace settings that would make every request fail with their defaults.
    pub fn sanitized(mut self) -> Self {
        if self.timeout_secs == 0 {
            warn!(
                default = DEFAULT_TIMEOUT_SECS,
                "Ignoring timeout_secs = 0, using the default"
            );
            self.timeout_secs = DEFAULT_TIMEOUT_SECS;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.label_policy, LabelPolicy::Strict);
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let config = ServiceConfig {
            timeout_secs: 0,
            ..ServiceConfig::default()
        }
        .sanitized();
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        let config = ServiceConfig {
            timeout_secs: 7,
            ..ServiceConfig::default()
        }
        .sanitized();
        assert_eq!(config.timeout_secs, 7);
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: ServiceConfig =
            serde_json::from_str(r#"{"label_policy":"lenient"}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_SERVICE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.label_policy, LabelPolicy::Lenient);
    }
}
