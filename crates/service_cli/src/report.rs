//! Printable reports.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use infra_config::AnalysisConfig;
use risk_core::{RiskSummary, VarEstimate, DEFAULT_CONFIDENCE};
use risk_scenarios::TailCrossings;
use risk_views::{format_count, format_price, DiagnosticViews};
use serde::Serialize;

/// Textual risk summary of one dataset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryReport {
    /// Dataset location as given.
    pub dataset: String,
    /// Core statistics.
    pub summary: RiskSummary,
    /// VaR at the configured confidence level.
    pub var_at_confidence: VarEstimate,
    /// Scenarios at or below VaR 95%.
    pub tail: TailCrossings,
    /// Multiplier applied to VaR 95%.
    pub trigger_factor: f64,
    /// Price level at which risk protocols activate.
    pub monitoring_trigger: f64,
    /// Standard deviation is zero.
    pub degenerate: bool,
}

impl SummaryReport {
    /// Write as aligned text.
    pub fn write_table<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let s = &self.summary;

        writeln!(out, "Scenario risk summary")?;
        writeln!(out, "  {:<20} {}", "Dataset", self.dataset)?;
        writeln!(out, "  {:<20} {}", "Scenarios", format_count(s.count))?;
        writeln!(out, "  {:<20} {}", "Mean price", format_price(s.mean_price))?;
        writeln!(out, "  {:<20} {}", "Std deviation", format_price(s.std_dev))?;
        writeln!(out, "  {:<20} {}", "VaR 95%", format_price(s.var_95))?;
        if self.var_at_confidence.confidence_level != DEFAULT_CONFIDENCE {
            writeln!(
                out,
                "  {:<20} {}",
                format!("VaR {}%", percent(self.var_at_confidence.confidence_level)),
                format_price(self.var_at_confidence.threshold)
            )?;
        }
        writeln!(
            out,
            "  {:<20} {} .. {}",
            "Price range",
            format_price(s.min_price),
            format_price(s.max_price)
        )?;
        writeln!(
            out,
            "  {:<20} {} ({:.2}%)",
            "At or below VaR 95%",
            format_count(self.tail.count),
            self.tail.share * 100.0
        )?;
        writeln!(
            out,
            "  {:<20} {} (VaR 95% x {})",
            "Monitoring trigger",
            format_price(self.monitoring_trigger),
            self.trigger_factor
        )?;
        if self.degenerate {
            writeln!(
                out,
                "  Note: standard deviation is zero; deviation scores and the 3-D view are unavailable"
            )?;
        }
        Ok(())
    }
}

fn percent(confidence: f64) -> String {
    let value = confidence * 100.0;
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round())
    } else {
        format!("{:.1}", value)
    }
}

/// JSON bundle written by the `views` command.
#[derive(Clone, Debug, Serialize)]
pub struct ViewBundle {
    /// Creation time of the bundle.
    pub generated_at: DateTime<Utc>,
    /// Dataset location as given.
    pub dataset: String,
    /// Requested sample size.
    pub sample_size: usize,
    /// Sampling seed.
    pub seed: u64,
    /// Statistics the views were derived from.
    pub summary: RiskSummary,
    /// Histogram and scatter descriptors.
    pub views: DiagnosticViews,
}

impl ViewBundle {
    /// Assemble a bundle stamped with the current time.
    pub fn new(config: &AnalysisConfig, summary: RiskSummary, views: DiagnosticViews) -> Self {
        Self {
            generated_at: Utc::now(),
            dataset: config.dataset_path.display().to_string(),
            sample_size: config.sample_size,
            seed: config.seed,
            summary,
            views,
        }
    }
}
