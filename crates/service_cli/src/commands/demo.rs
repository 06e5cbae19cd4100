//! Demo command: generate a synthetic dataset and analyse it end to end.
//!
//! # Expected Output
//!
//! ```text
//! [Demo] Generating 100,000 GBM paths (252 steps) into demo-output/simulacion_riesgo.csv
//! Scenario risk summary
//!   ...
//! View bundle written to demo-output/views.json
//! ```

use std::io::Write;
use std::path::PathBuf;

use adapter_loader::{DatasetCache, DEFAULT_DATASET_FILE};
use demo_inputs::{GbmConfig, GbmScenarioGenerator};
use infra_config::AnalysisConfig;
use risk_views::format_count;

use crate::commands::{summary, views};
use crate::Result;

/// File name of the view bundle written next to the generated dataset.
pub const VIEW_BUNDLE_FILE: &str = "views.json";

/// Demo parameters.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Output directory, created if missing.
    pub dir: PathBuf,
    /// Number of simulated paths.
    pub rows: usize,
    /// Time steps per path.
    pub steps: usize,
    /// Seed of the path generator (independent of the sampling seed).
    pub path_seed: u64,
}

/// Runs the demo: generate, summarise, write views.
pub fn run<W: Write>(
    config: &AnalysisConfig,
    cache: &DatasetCache,
    options: &DemoOptions,
    out: &mut W,
) -> Result<()> {
    std::fs::create_dir_all(&options.dir)?;
    let dataset_path = options.dir.join(DEFAULT_DATASET_FILE);

    let gbm = GbmConfig {
        num_simulations: options.rows,
        num_steps: options.steps,
        ..GbmConfig::default()
    };
    let generator = GbmScenarioGenerator::new(gbm, options.path_seed)?;

    writeln!(
        out,
        "[Demo] Generating {} GBM paths ({} steps) into {}",
        format_count(options.rows),
        options.steps,
        dataset_path.display()
    )?;
    generator.write_csv(&dataset_path)?;

    let config = AnalysisConfig {
        dataset_path,
        ..config.clone()
    };
    summary::run(&config, cache, out)?;
    views::run(&config, cache, Some(&options.dir.join(VIEW_BUNDLE_FILE)), out)?;
    Ok(())
}
