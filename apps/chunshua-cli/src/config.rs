//! CLI configuration.
//!
//! Supports loading from YAML files with environment variable overrides.

use std::path::Path;

use anyhow::{Context, Result};
use chunshua_core::config::DEFAULT_USER_AGENT;
use serde::Deserialize;

/// CLI configuration loaded from YAML with environment overrides.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// `User-Agent` header sent with HEAD requests.
    /// Override: `CHUNSHUA_USER_AGENT`
    pub user_agent: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from a YAML file, then applies environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = path {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CHUNSHUA_USER_AGENT") {
            if !val.trim().is_empty() {
                self.user_agent = val;
            }
        }

        // Note: CHUNSHUA_LOG_LEVEL is handled by clap via #[arg(env = ...)] in main.rs
    }

    /// Converts to chunshua-core's Config type.
    pub fn to_core_config(&self) -> chunshua_core::Config {
        chunshua_core::Config {
            user_agent: self.user_agent.clone(),
            ..Default::default()
        }
    }
}
