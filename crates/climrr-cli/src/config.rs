//! CLI configuration, loadable from TOML or environment.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use climrr_intent::ClarificationPolicy;

/// Errors loading CLI configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid value for {var}: {value}")]
    Env { var: &'static str, value: String },
}

/// Top-level CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CliConfig {
    /// Dataset JSON used by `query` when `--dataset` is not given.
    #[serde(default)]
    pub dataset_path: Option<String>,
    /// Clarification turns before answering with defaults.
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,
    /// Emit logs as JSON lines on stderr.
    #[serde(default)]
    pub json_logs: bool,
    /// Pretty-print command output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_max_turns() -> u32 {
    ClarificationPolicy::default().max_turns
}

fn default_pretty() -> bool {
    true
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            max_turns: default_max_turns(),
            json_logs: false,
            pretty: default_pretty(),
        }
    }
}

impl CliConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Defaults overridden by `CLIMRR_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env()
    }

    /// Override this config with `CLIMRR_*` environment variables.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    /// Apply `CLIMRR_DATASET`, `CLIMRR_MAX_TURNS` and `CLIMRR_JSON_LOGS`
    /// from the given lookup.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = lookup("CLIMRR_DATASET") {
            self.dataset_path = Some(path);
        }
        if let Some(value) = lookup("CLIMRR_MAX_TURNS") {
            self.max_turns = value.trim().parse().map_err(|_| ConfigError::Env {
                var: "CLIMRR_MAX_TURNS",
                value,
            })?;
        }
        if let Some(value) = lookup("CLIMRR_JSON_LOGS") {
            self.json_logs = value.eq_ignore_ascii_case("true") || value == "1";
        }
        Ok(self)
    }

    pub fn policy(&self) -> ClarificationPolicy {
        ClarificationPolicy {
            max_turns: self.max_turns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = CliConfig::default();
        assert!(config.dataset_path.is_none());
        assert_eq!(config.max_turns, 2);
        assert!(!config.json_logs);
        assert!(config.pretty);
    }

    #[test]
    fn deserialize_minimal_config() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn deserialize_full_config() {
        let config: CliConfig = toml::from_str(
            r#"
dataset_path = "/srv/climrr/site.json"
max_turns = 3
json_logs = true
pretty = false
"#,
        )
        .unwrap();
        assert_eq!(config.dataset_path.as_deref(), Some("/srv/climrr/site.json"));
        assert_eq!(config.policy().max_turns, 3);
        assert!(config.json_logs);
        assert!(!config.pretty);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_turns = 1").unwrap();
        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_turns, 1);
    }

    #[test]
    fn bad_toml_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_turns = \"many\"").unwrap();
        let err = CliConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn env_overrides() {
        let config = CliConfig::default()
            .with_overrides(env(&[
                ("CLIMRR_DATASET", "data.json"),
                ("CLIMRR_MAX_TURNS", "5"),
                ("CLIMRR_JSON_LOGS", "TRUE"),
            ]))
            .unwrap();
        assert_eq!(config.dataset_path.as_deref(), Some("data.json"));
        assert_eq!(config.max_turns, 5);
        assert!(config.json_logs);
    }

    #[test]
    fn from_process_env() {
        // Only test in this crate that touches the process environment
        unsafe {
            std::env::set_var("CLIMRR_DATASET", "/srv/climrr/env.json");
            std::env::set_var("CLIMRR_MAX_TURNS", "4");
        }
        let config = CliConfig::from_env();
        unsafe {
            std::env::remove_var("CLIMRR_DATASET");
            std::env::remove_var("CLIMRR_MAX_TURNS");
        }
        let config = config.unwrap();
        assert_eq!(config.dataset_path.as_deref(), Some("/srv/climrr/env.json"));
        assert_eq!(config.max_turns, 4);
        assert!(config.pretty);
    }

    #[test]
    fn invalid_env_turns() {
        let err = CliConfig::default()
            .with_overrides(env(&[("CLIMRR_MAX_TURNS", "two")]))
            .unwrap_err();
        assert!(err.to_string().contains("CLIMRR_MAX_TURNS"));
    }
}
