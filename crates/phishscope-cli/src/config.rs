//! Configuration file and environment overrides.
//!
//! Precedence, lowest first: built-in defaults, the TOML file, environment
//! variables, command-line flags.

use anyhow::{Context, Result};
use phishscope_core::{LabelPolicy, ServiceConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const ENV_SERVICE_URL: &str = "PHISHSCOPE_SERVICE_URL";
pub const ENV_TIMEOUT_SECS: &str = "PHISHSCOPE_TIMEOUT_SECS";
pub const ENV_LENIENT_LABELS: &str = "PHISHSCOPE_LENIENT_LABELS";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
}

impl Config {
    /// Load the configuration file.
    ///
    /// A missing file at the default location yields defaults; a missing file
    /// at an explicitly given path is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                path.to_path_buf()
            }
            None => match Self::default_path() {
                Ok(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.service = config.service.sanitized();

        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Write the configuration as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// `<config dir>/phishscope/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("phishscope").join("config.toml"))
    }

    /// Apply environment variables (env vars take precedence over the file).
    pub fn merge_with_env(self) -> Self {
        self.merge_with(|key| std::env::var(key).ok())
    }

    fn merge_with(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_SERVICE_URL) {
            self.service.base_url = url;
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.service.timeout_secs = secs,
                _ => warn!(value = %raw, "Ignoring invalid {}", ENV_TIMEOUT_SECS),
            }
        }

        if let Some(raw) = lookup(ENV_LENIENT_LABELS) {
            match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => self.service.label_policy = LabelPolicy::Lenient,
                "0" | "false" | "no" => self.service.label_policy = LabelPolicy::Strict,
                _ => warn!(value = %raw, "Ignoring invalid {}", ENV_LENIENT_LABELS),
            }
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.service.base_url = "http://classifier.internal:8080".to_string();
        config.service.label_policy = LabelPolicy::Lenient;
        config.save(&path).unwrap();

        assert_eq!(Config::load(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[service]\ntimeout_secs = 5\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.service.timeout_secs, 5);
        assert_eq!(config.service.base_url, "http://localhost:5000");
        assert_eq!(config.service.label_policy, LabelPolicy::Strict);
    }

    #[test]
    fn test_zero_timeout_in_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[service]\ntimeout_secs = 0\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.service.timeout_secs, 30);

        let from_env = Config::default().merge_with(env(&[(ENV_TIMEOUT_SECS, "0")]));
        assert_eq!(from_env.service.timeout_secs, config.service.timeout_secs);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[service\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::default().merge_with(env(&[
            (ENV_SERVICE_URL, "http://10.0.0.2:5000"),
            (ENV_TIMEOUT_SECS, "12"),
            (ENV_LENIENT_LABELS, "TRUE"),
        ]));
        assert_eq!(config.service.base_url, "http://10.0.0.2:5000");
        assert_eq!(config.service.timeout_secs, 12);
        assert_eq!(config.service.label_policy, LabelPolicy::Lenient);
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let config = Config::default().merge_with(env(&[
            (ENV_TIMEOUT_SECS, "soon"),
            (ENV_LENIENT_LABELS, "maybe"),
        ]));
        assert_eq!(config, Config::default());
    }
}
