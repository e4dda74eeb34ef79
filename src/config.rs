//! Configuration types for deal-calc

use crate::telemetry::LogFormat;
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Statistics engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Cases opened next round when none is given on the command line
    #[serde(default = "default_reveal_count")]
    pub default_reveal_count: usize,

    /// Log a warning when a round has more reveal scenarios than this
    #[serde(default = "default_warn_combinations")]
    pub warn_combinations: u64,
}

fn default_reveal_count() -> usize {
    1
}
fn default_warn_combinations() -> u64 {
    1_000_000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_reveal_count: 1,
            warn_combinations: 1_000_000,
        }
    }
}

/// Board selection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    /// Preset id loaded when none is given on the command line
    #[serde(default = "default_preset")]
    pub preset: String,

    /// Number of $1,000,000 cases on the Million Dollar Mission board
    #[serde(default = "default_million_cases")]
    pub million_cases: usize,
}

fn default_preset() -> String {
    "standard".to_string()
}
fn default_million_cases() -> usize {
    4
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            million_cases: 4,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
