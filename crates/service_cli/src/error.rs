//! CLI error types.

use demo_inputs::GeneratorError;
use infra_config::ConfigError;
use risk_core::RiskError;
use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Risk pipeline error
    #[error(transparent)]
    Risk(#[from] RiskError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Scenario generator error
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Process exit code for this error.
    ///
    /// | code | meaning                  |
    /// |------|--------------------------|
    /// | 2    | dataset not found        |
    /// | 3    | schema violation         |
    /// | 4    | empty or single-row data |
    /// | 5    | degenerate distribution  |
    /// | 1    | anything else            |
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Risk(RiskError::DatasetNotFound { .. }) => 2,
            Self::Risk(RiskError::Schema(_)) => 3,
            Self::Risk(RiskError::EmptyDataset | RiskError::InsufficientData { .. }) => 4,
            Self::Risk(RiskError::DegenerateDistribution) => 5,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::from(RiskError::not_found("x.csv", "no such file")).exit_code(), 2);
        assert_eq!(CliError::from(RiskError::schema("bad")).exit_code(), 3);
        assert_eq!(CliError::from(RiskError::EmptyDataset).exit_code(), 4);
        assert_eq!(
            CliError::from(RiskError::InsufficientData { count: 1 }).exit_code(),
            4
        );
        assert_eq!(CliError::from(RiskError::DegenerateDistribution).exit_code(), 5);
        assert_eq!(CliError::invalid_argument("x").exit_code(), 1);
        assert_eq!(
            CliError::from(ConfigError::InvalidLogLevel("x".to_string())).exit_code(),
            1
        );
    }

    #[test]
    fn test_risk_error_display_is_transparent() {
        let err = CliError::from(RiskError::EmptyDataset);
        assert_eq!(err.to_string(), RiskError::EmptyDataset.to_string());
    }
}
