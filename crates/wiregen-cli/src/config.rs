//! wiregen.toml project configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use wiregen_codegen::GeneratorConfig;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "wiregen.toml";

/// wiregen.toml structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl ProjectConfig {
    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::from_str(&content).with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Parse configuration from a string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse wiregen.toml")
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `./wiregen.toml` is used when
    /// present and defaults apply otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                tracing::debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
