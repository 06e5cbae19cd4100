//! Generator error types.

use thiserror::Error;

/// Errors raised while configuring or running the scenario generator.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// One or more simulation parameters are out of range.
    #[error("Invalid simulation config: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),

    /// The output file could not be written.
    #[error("Failed to write dataset: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialisation failed.
    #[error("Failed to encode dataset: {0}")]
    Csv(#[from] csv::Error),
}
