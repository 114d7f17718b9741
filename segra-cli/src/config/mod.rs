//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Streaming configuration
    #[serde(default)]
    pub streaming: StreamingConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Prefix text output with byte offsets
    pub show_offsets: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            show_offsets: false,
        }
    }
}

/// Streaming-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StreamingConfig {
    /// Read size per chunk (KB)
    pub chunk_kb: usize,

    /// Files above this size are streamed (MB)
    pub threshold_mb: u64,
}

impl Default for StreamingConfig {
    fn default() -> Self {
        Self {
            chunk_kb: 64,
            threshold_mb: 10,
        }
    }
}

impl CliConfig {
    /// Load the configuration file, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;

        if config.streaming.chunk_kb == 0 {
            return Err(CliError::ConfigError("streaming.chunk_kb must be positive".into()).into());
        }

        Ok(config)
    }

    /// Serialize the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
