//! Risk pipeline error types.
//!
//! Every stage of the pipeline (loading, statistics, sampling, views)
//! reports failures through [`RiskError`], so the caller sees exactly one
//! diagnostic naming the contract that was violated.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias for risk pipeline operations.
pub type Result<T> = std::result::Result<T, RiskError>;

/// Errors that can occur while analysing a scenario dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// The dataset location does not resolve to a readable file.
    #[error(
        "Dataset not found: '{}' is not a readable file ({reason}). Run the scenario generator first",
        .path.display()
    )]
    DatasetNotFound {
        /// Location that was requested.
        path: PathBuf,
        /// Underlying reason, already made human readable.
        reason: String,
    },

    /// Required columns are absent or hold invalid values.
    #[error("Schema error: {0}")]
    Schema(String),

    /// Statistics were requested on a dataset with no rows.
    #[error("Dataset is empty: at least one scenario is required")]
    EmptyDataset,

    /// Fewer observations than the sample standard deviation needs.
    #[error("Insufficient data: the sample standard deviation needs at least 2 scenarios, found {count}")]
    InsufficientData {
        /// Rows available.
        count: usize,
    },

    /// Standard deviation is zero, so deviation scores are undefined.
    #[error("Degenerate distribution: standard deviation is zero, deviation scores are undefined")]
    DegenerateDistribution,

    /// A caller supplied parameter is out of range.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },
}

impl RiskError {
    /// Create a dataset-not-found error.
    pub fn not_found(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::DatasetNotFound {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create a schema error.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Short name of the violated contract, stable for logs and exit codes.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DatasetNotFound { .. } => "DatasetNotFound",
            Self::Schema(_) => "SchemaError",
            Self::EmptyDataset => "EmptyDataset",
            Self::InsufficientData { .. } => "InsufficientData",
            Self::DegenerateDistribution => "DegenerateDistribution",
            Self::InvalidParameter { .. } => "InvalidParameter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let err = RiskError::not_found("simulacion_riesgo.csv", "No such file or directory");
        let msg = err.to_string();
        assert!(msg.starts_with("Dataset not found: 'simulacion_riesgo.csv'"));
        assert!(msg.contains("Run the scenario generator first"));
    }

    #[test]
    fn test_error_display_schema() {
        let err = RiskError::schema("missing required column 'final_price'");
        assert_eq!(
            err.to_string(),
            "Schema error: missing required column 'final_price'"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(RiskError::EmptyDataset.kind(), "EmptyDataset");
        assert_eq!(
            RiskError::DegenerateDistribution.kind(),
            "DegenerateDistribution"
        );
        assert_eq!(RiskError::schema("x").kind(), "SchemaError");
        assert_eq!(
            RiskError::InsufficientData { count: 1 }.kind(),
            "InsufficientData"
        );
        assert_eq!(RiskError::not_found("a", "b").kind(), "DatasetNotFound");
    }

    #[test]
    fn test_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(RiskError::EmptyDataset);
        assert!(err.to_string().contains("empty"));
    }
}
