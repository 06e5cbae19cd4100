//! # Infra Config (I: Foundation)
//!
//! Layered configuration for the risk analysis tools.
//!
//! ```text
//! defaults  <  mcrisk.toml  <  MCRISK_* env  <  CLI flags
//! ```
//!
//! The merged [`AnalysisConfig`] is validated once, after every source has
//! been applied, and all violations are reported together.
//!
//! ## Example
//!
//! ```
//! use infra_config::{build_config_with, CliOverrides};
//! use std::path::Path;
//!
//! let cli = CliOverrides { sample_size: Some(500), ..Default::default() };
//! let config = build_config_with(&cli, Path::new("does-not-exist"), |_| None).unwrap();
//!
//! assert_eq!(config.sample_size, 500);
//! assert_eq!(config.seed, 42);
//! ```

pub mod config;
pub mod error;
pub mod sources;

pub use config::{AnalysisConfig, LogLevel, OutputFormat, DEFAULT_DATASET_PATH, MAX_BIN_COUNT};
pub use error::ConfigError;
pub use sources::{build_config, build_config_with, env_vars, CliOverrides, DEFAULT_CONFIG_FILE};
