//! Check command implementation
//!
//! Validates the merged configuration and the dataset file contract
//! without computing any statistics.

use std::io::Write;

use adapter_loader::DatasetCache;
use infra_config::{AnalysisConfig, OutputFormat};
use risk_core::RiskError;
use serde::Serialize;
use tracing::info;

use crate::Result;

/// Outcome of a successful check.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckReport {
    /// Dataset location as given.
    pub dataset: String,
    /// Rows in the dataset.
    pub rows: usize,
    /// Configured sample size.
    pub sample_size: usize,
    /// Whether the sample will be the whole population.
    pub sample_covers_population: bool,
    /// Configured seed.
    pub seed: u64,
    /// Configured bin count.
    pub bin_count: usize,
    /// Configured confidence level.
    pub confidence_level: f64,
    /// Configured trigger factor.
    pub trigger_factor: f64,
}

/// Run the check command
pub fn run<W: Write>(config: &AnalysisConfig, cache: &DatasetCache, out: &mut W) -> Result<CheckReport> {
    info!("Checking configuration and dataset...");

    let dataset = cache.get_or_load(&config.dataset_path)?;
    if dataset.is_empty() {
        return Err(RiskError::EmptyDataset.into());
    }

    let report = CheckReport {
        dataset: config.dataset_path.display().to_string(),
        rows: dataset.len(),
        sample_size: config.sample_size,
        sample_covers_population: config.sample_size >= dataset.len(),
        seed: config.seed,
        bin_count: config.bin_count,
        confidence_level: config.confidence_level,
        trigger_factor: config.trigger_factor,
    };

    match config.output_format {
        OutputFormat::Table => {
            writeln!(out, "Configuration OK")?;
            writeln!(out, "  sample_size       {}", report.sample_size)?;
            writeln!(out, "  seed              {}", report.seed)?;
            writeln!(out, "  bin_count         {}", report.bin_count)?;
            writeln!(out, "  confidence_level  {}", report.confidence_level)?;
            writeln!(out, "  trigger_factor    {}", report.trigger_factor)?;
            writeln!(out, "Dataset OK")?;
            writeln!(out, "  path              {}", report.dataset)?;
            writeln!(out, "  rows              {}", report.rows)?;
            if report.sample_covers_population {
                writeln!(out, "  note              sample size covers the whole dataset")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(report)
}
