//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidOutputFormat(String),

    #[error("Configuration file error: cannot read '{}': {reason}", .path.display())]
    FileError { path: PathBuf, reason: String },

    #[error("Configuration file error: cannot parse '{}': {reason}", .path.display())]
    ParseError { path: PathBuf, reason: String },

    #[error("Environment variable error: {var}: {reason}")]
    EnvError { var: String, reason: String },

    #[error("Invalid configuration: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl ConfigError {
    /// Create an environment variable error.
    pub fn env(var: &str, reason: impl Into<String>) -> Self {
        Self::EnvError {
            var: var.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidLogLevel("loud".to_string());
        assert!(err.to_string().contains("Invalid log level: loud"));

        let err = ConfigError::env("MCRISK_SEED", "not an integer");
        assert_eq!(
            err.to_string(),
            "Environment variable error: MCRISK_SEED: not an integer"
        );

        let err = ConfigError::Validation(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "Invalid configuration: a; b");
    }
}
