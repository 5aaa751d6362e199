//! Configuration for the line filter and stream driver

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default configuration constants
pub mod defaults {
    /// Default read chunk size in bytes (16KB)
    pub const CHUNK_SIZE: usize = 16 * 1024;
}

/// How a carriage return treats bytes already written to the current line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwriteMode {
    /// Move the cursor to column zero and keep the buffer. A shorter
    /// overwrite leaves the tail of a longer earlier segment in place,
    /// exactly like a terminal does.
    #[default]
    Retain,
    /// Move the cursor to column zero and drop the buffer, so only the
    /// bytes after the last carriage return survive.
    Truncate,
}

impl OverwriteMode {
    /// Get the configuration name of this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            OverwriteMode::Retain => "retain",
            OverwriteMode::Truncate => "truncate",
        }
    }
}

impl fmt::Display for OverwriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverwriteMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "retain" => Ok(OverwriteMode::Retain),
            "truncate" => Ok(OverwriteMode::Truncate),
            other => Err(Error::Configuration(format!(
                "unknown overwrite mode '{other}' (expected 'retain' or 'truncate')"
            ))),
        }
    }
}

/// Filter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) chunk_size: usize, // in bytes
    pub(crate) mode: OverwriteMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_size: defaults::CHUNK_SIZE,
            mode: OverwriteMode::default(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Read chunk size in bytes
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Carriage return handling
    pub fn mode(&self) -> OverwriteMode {
        self.mode
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.chunk_size == 0 {
            return Err(Error::Configuration(
                "chunk_size must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    chunk_size: Option<usize>,
    mode: Option<OverwriteMode>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the read chunk size in bytes
    pub fn chunk_size(mut self, bytes: usize) -> Self {
        self.chunk_size = Some(bytes);
        self
    }

    /// Set the carriage return handling
    pub fn mode(mut self, mode: OverwriteMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(size) = self.chunk_size {
            config.chunk_size = size;
        }

        if let Some(mode) = self.mode {
            config.mode = mode;
        }

        config.validate()?;
        Ok(config)
    }
}
