//! Configuration sources and their merge order.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (`MCRISK_*`)
//! 3. Config file (`--config`, or `mcrisk.toml` in the working directory)
//! 4. Default values

use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use crate::config::{AnalysisConfig, LogLevel, OutputFormat};
use crate::error::ConfigError;

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "mcrisk.toml";

/// Environment variable names.
pub mod env_vars {
    pub const DATASET: &str = "MCRISK_DATASET";
    pub const SAMPLE_SIZE: &str = "MCRISK_SAMPLE_SIZE";
    pub const SEED: &str = "MCRISK_SEED";
    pub const BIN_COUNT: &str = "MCRISK_BIN_COUNT";
    pub const CONFIDENCE_LEVEL: &str = "MCRISK_CONFIDENCE_LEVEL";
    pub const TRIGGER_FACTOR: &str = "MCRISK_TRIGGER_FACTOR";
    pub const LOG_LEVEL: &str = "MCRISK_LOG_LEVEL";
    pub const OUTPUT_FORMAT: &str = "MCRISK_OUTPUT_FORMAT";
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Dataset location override
    pub dataset_path: Option<PathBuf>,
    /// Sample size override
    pub sample_size: Option<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Bin count override
    pub bin_count: Option<usize>,
    /// Confidence level override
    pub confidence_level: Option<f64>,
    /// Trigger factor override
    pub trigger_factor: Option<f64>,
    /// Log level override
    pub log_level: Option<LogLevel>,
    /// Output format override
    pub output_format: Option<OutputFormat>,
}

impl AnalysisConfig {
    /// Apply `MCRISK_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    /// Apply `MCRISK_*` overrides read through `lookup`.
    ///
    /// Unset variables leave the field untouched; a set but unparsable
    /// variable is an error rather than being silently ignored.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(env_vars::DATASET) {
            self.dataset_path = PathBuf::from(path);
        }
        if let Some(v) = parse_var(&lookup, env_vars::SAMPLE_SIZE)? {
            self.sample_size = v;
        }
        if let Some(v) = parse_var(&lookup, env_vars::SEED)? {
            self.seed = v;
        }
        if let Some(v) = parse_var(&lookup, env_vars::BIN_COUNT)? {
            self.bin_count = v;
        }
        if let Some(v) = parse_var(&lookup, env_vars::CONFIDENCE_LEVEL)? {
            self.confidence_level = v;
        }
        if let Some(v) = parse_var(&lookup, env_vars::TRIGGER_FACTOR)? {
            self.trigger_factor = v;
        }
        if let Some(level) = lookup(env_vars::LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup(env_vars::OUTPUT_FORMAT) {
            self.output_format = OutputFormat::from_str(&format)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(path) = &cli.dataset_path {
            self.dataset_path = path.clone();
        }
        if let Some(v) = cli.sample_size {
            self.sample_size = v;
        }
        if let Some(v) = cli.seed {
            self.seed = v;
        }
        if let Some(v) = cli.bin_count {
            self.bin_count = v;
        }
        if let Some(v) = cli.confidence_level {
            self.confidence_level = v;
        }
        if let Some(v) = cli.trigger_factor {
            self.trigger_factor = v;
        }
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if let Some(format) = cli.output_format {
            self.output_format = format;
        }
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::env(name, format!("cannot parse '{}'", raw))),
    }
}

/// Build configuration from all sources using the process environment.
pub fn build_config(cli: &CliOverrides) -> Result<AnalysisConfig, ConfigError> {
    build_config_with(cli, Path::new("."), |name| std::env::var(name).ok())
}

/// Build configuration from all sources.
///
/// `working_dir` is searched for [`DEFAULT_CONFIG_FILE`] when the CLI names
/// no config file. An explicitly named file must exist; the implicit one is
/// optional.
pub fn build_config_with<F>(
    cli: &CliOverrides,
    working_dir: &Path,
    lookup: F,
) -> Result<AnalysisConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => AnalysisConfig::from_file(path)?,
        None => {
            let implicit = working_dir.join(DEFAULT_CONFIG_FILE);
            if implicit.is_file() {
                debug!(path = %implicit.display(), "Using config file from working directory");
                AnalysisConfig::from_file(&implicit)?
            } else {
                AnalysisConfig::default()
            }
        }
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli);

    // Final validation
    config.validate()?;
    Ok(config)
}
