//! Analysis pipeline: load, summarise, sample, describe.
//!
//! ```text
//! dataset file ──► DatasetCache ──► RiskStatistics ──┬──► SummaryReport
//!                                                    └──► ScenarioSampler ──► ViewBuilder
//! ```
//!
//! The summary and both views are derived from the same [`RiskSummary`],
//! so the figures printed and the markers drawn always agree.

use std::path::PathBuf;
use std::sync::Arc;

use adapter_loader::DatasetCache;
use infra_config::AnalysisConfig;
use risk_core::{RiskStatistics, RiskSummary, ScenarioDataset};
use risk_scenarios::{SampleConfig, ScenarioSampler, TailCrossings};
use risk_views::{DiagnosticViews, ViewBuilder};
use tracing::info;

use crate::report::SummaryReport;
use crate::Result;

/// A loaded dataset together with its summary statistics.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// Location the dataset was read from.
    pub dataset_path: PathBuf,
    /// Shared, immutable dataset.
    pub dataset: Arc<ScenarioDataset>,
    /// Statistics of the dataset.
    pub summary: RiskSummary,
}

impl Analysis {
    /// Load the configured dataset through `cache` and compute its summary.
    pub fn run(config: &AnalysisConfig, cache: &DatasetCache) -> Result<Self> {
        let dataset = cache.get_or_load(&config.dataset_path)?;
        let summary = RiskStatistics::compute(&dataset)?;

        info!(
            rows = summary.count,
            mean = summary.mean_price,
            std_dev = summary.std_dev,
            var_95 = summary.var_95,
            "Risk summary computed"
        );

        Ok(Self {
            dataset_path: config.dataset_path.clone(),
            dataset,
            summary,
        })
    }

    /// Textual risk summary.
    ///
    /// Available for degenerate distributions as well; only the deviation
    /// based views require a positive standard deviation.
    pub fn summary_report(&self, config: &AnalysisConfig) -> Result<SummaryReport> {
        let prices = self.dataset.prices();
        let var_at_confidence = RiskStatistics::value_at_risk(&prices, config.confidence_level)?;
        let tail = TailCrossings::at_or_below(&self.dataset, self.summary.var_95)?;

        Ok(SummaryReport {
            dataset: self.dataset_path.display().to_string(),
            summary: self.summary,
            var_at_confidence,
            tail,
            trigger_factor: config.trigger_factor,
            monitoring_trigger: self.summary.var_95 * config.trigger_factor,
            degenerate: self.summary.is_degenerate(),
        })
    }

    /// Histogram over the full population and scatter over a seeded sample.
    pub fn diagnostic_views(&self, config: &AnalysisConfig) -> Result<DiagnosticViews> {
        let sampler = ScenarioSampler::new(SampleConfig::new(config.sample_size, config.seed));
        let sample = sampler.sample(&self.dataset, &self.summary)?;
        let views = ViewBuilder::new(config.bin_count)?.build(&self.dataset, &self.summary, &sample)?;

        info!(
            bins = views.histogram.bins.len(),
            points = views.scatter.len(),
            "Diagnostic views built"
        );
        Ok(views)
    }
}
