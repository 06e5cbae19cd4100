//! Analysis configuration.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ConfigError;

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "simulacion_riesgo.csv";

/// Largest accepted histogram bin count.
pub const MAX_BIN_COUNT: usize = 10_000;

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned human-readable text.
    #[default]
    Table,
    /// Machine-readable JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr<Err = ConfigError>,
{
    let s = String::deserialize(deserializer)?;
    T::from_str(&s).map_err(serde::de::Error::custom)
}

/// Parameters of one analysis run.
///
/// Every field has a default, so a TOML file only needs the keys it
/// changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Scenario dataset location
    pub dataset_path: PathBuf,
    /// Rows drawn for the 3-D view
    pub sample_size: usize,
    /// Seed of the sampling generator
    pub seed: u64,
    /// Histogram bin count
    pub bin_count: usize,
    /// Confidence of the additional VaR figure in the summary
    pub confidence_level: f64,
    /// Multiplier on VaR 95% giving the monitoring trigger
    pub trigger_factor: f64,
    /// Log level
    #[serde(deserialize_with = "deserialize_from_str")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_from_str")]
    pub output_format: OutputFormat,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            sample_size: 2_000,
            seed: 42,
            bin_count: 100,
            confidence_level: 0.95,
            trigger_factor: 1.05,
            log_level: LogLevel::Info,
            output_format: OutputFormat::Table,
        }
    }
}

impl AnalysisConfig {
    /// Create a new AnalysisConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file. Keys absent from the file keep
    /// their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Validate the configuration, reporting every violation at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.dataset_path.as_os_str().is_empty() {
            errors.push("dataset_path cannot be empty".to_string());
        }

        if self.sample_size == 0 {
            errors.push("sample_size must be greater than 0".to_string());
        }

        if self.bin_count == 0 || self.bin_count > MAX_BIN_COUNT {
            errors.push(format!(
                "bin_count {} out of range (1..={})",
                self.bin_count, MAX_BIN_COUNT
            ));
        }

        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            errors.push(format!(
                "confidence_level {} must lie strictly between 0 and 1",
                self.confidence_level
            ));
        }

        if !(self.trigger_factor.is_finite() && self.trigger_factor >= 1.0) {
            errors.push(format!(
                "trigger_factor {} must be a finite number >= 1",
                self.trigger_factor
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}
