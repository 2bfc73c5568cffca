// ABOUTME: Configuration management for the stencil CLI
// ABOUTME: Handles loading configuration from YAML files with sane defaults

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub template_vars: HashMap<String, String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file, or defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file: {}", path.display()))?;
                serde_yaml::from_str(&content)
                    .with_context(|| format!("failed to parse config file: {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Merge variable overrides on top of configured defaults.
    pub fn merge_variables(&mut self, variables: HashMap<String, String>) {
        self.template_vars.extend(variables);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.template_vars.is_empty());
    }

    #[test]
    fn test_merge_variables() {
        let mut config = Config::default();
        config
            .template_vars
            .insert("env".to_string(), "dev".to_string());
        let mut overrides = HashMap::new();
        overrides.insert("env".to_string(), "prod".to_string());
        overrides.insert("region".to_string(), "us-east-1".to_string());
        config.merge_variables(overrides);
        assert_eq!(config.template_vars.get("env"), Some(&"prod".to_string()));
        assert_eq!(
            config.template_vars.get("region"),
            Some(&"us-east-1".to_string())
        );
    }
}
