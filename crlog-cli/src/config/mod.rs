//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use crlog_core::{Config, OverwriteMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Filter configuration
    #[serde(default)]
    pub filter: FilterConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Filter-related configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Read chunk size (KB)
    pub chunk_size_kb: usize,

    /// Carriage return handling
    pub mode: OverwriteMode,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            chunk_size_kb: crlog_core::defaults::CHUNK_SIZE / 1024,
            mode: OverwriteMode::default(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Print run statistics as JSON on stderr
    pub stats: bool,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.message().to_string()).into())
    }

    /// Render configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Build the core filter configuration
    pub fn to_filter_config(&self) -> Result<Config> {
        let chunk_size = self
            .filter
            .chunk_size_kb
            .checked_mul(1024)
            .ok_or_else(|| {
                CliError::ConfigError(format!(
                    "chunk_size_kb {} is too large",
                    self.filter.chunk_size_kb
                ))
            })?;

        let config = Config::builder()
            .chunk_size(chunk_size)
            .mode(self.filter.mode)
            .build()?;

        Ok(config)
    }
}
