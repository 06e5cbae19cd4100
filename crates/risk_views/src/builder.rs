//! Diagnostic view builder.

use risk_core::{Result, RiskError, RiskSummary, ScenarioDataset};
use risk_scenarios::{ScenarioSample, TailCrossings};
use serde::Serialize;
use tracing::debug;

use crate::histogram::{bin_prices, markers, title, HistogramView};
use crate::scatter::ScatterView;

/// Default number of histogram bins.
pub const DEFAULT_BIN_COUNT: usize = 100;

/// The two diagnostic descriptors of a run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DiagnosticViews {
    /// Full-population distribution.
    pub histogram: HistogramView,
    /// Sampled 3-D dispersion.
    pub scatter: ScatterView,
}

/// Builds view descriptors from the statistics and the sample.
#[derive(Clone, Copy, Debug)]
pub struct ViewBuilder {
    bin_count: usize,
}

impl Default for ViewBuilder {
    fn default() -> Self {
        Self {
            bin_count: DEFAULT_BIN_COUNT,
        }
    }
}

impl ViewBuilder {
    /// Create a builder with the given histogram bin count.
    ///
    /// # Errors
    ///
    /// [`RiskError::InvalidParameter`] if `bin_count` is zero.
    pub fn new(bin_count: usize) -> Result<Self> {
        if bin_count == 0 {
            return Err(RiskError::invalid_parameter(
                "bin_count",
                "must be greater than 0",
            ));
        }
        Ok(Self { bin_count })
    }

    /// Histogram bin count.
    pub fn bin_count(&self) -> usize {
        self.bin_count
    }

    /// Build the histogram descriptor over the full population.
    ///
    /// # Errors
    ///
    /// - [`RiskError::EmptyDataset`] on an empty dataset
    /// - [`RiskError::InvalidParameter`] if `summary` was computed from a
    ///   different dataset
    pub fn histogram(&self, dataset: &ScenarioDataset, summary: &RiskSummary) -> Result<HistogramView> {
        if dataset.is_empty() {
            return Err(RiskError::EmptyDataset);
        }
        if summary.count != dataset.len() {
            return Err(RiskError::invalid_parameter(
                "summary",
                format!(
                    "computed from {} rows but the dataset has {}",
                    summary.count,
                    dataset.len()
                ),
            ));
        }

        let (bin_width, bins) = bin_prices(dataset, summary, self.bin_count);
        let tail = TailCrossings::at_or_below(dataset, summary.var_95)?;

        debug!(
            bins = bins.len(),
            bin_width,
            tail_count = tail.count,
            "Histogram descriptor built"
        );

        Ok(HistogramView {
            title: title(dataset.len()),
            x_label: "Asset Price ($)".to_string(),
            y_label: "Absolute Frequency".to_string(),
            population: dataset.len(),
            bin_width,
            bins,
            markers: markers(summary),
            tail,
        })
    }

    /// Build the scatter descriptor from the sampled subset.
    pub fn scatter(&self, sample: &ScenarioSample) -> ScatterView {
        ScatterView::from_sample(sample)
    }

    /// Build both descriptors.
    pub fn build(
        &self,
        dataset: &ScenarioDataset,
        summary: &RiskSummary,
        sample: &ScenarioSample,
    ) -> Result<DiagnosticViews> {
        Ok(DiagnosticViews {
            histogram: self.histogram(dataset, summary)?,
            scatter: self.scatter(sample),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::MarkerKind;
    use approx::assert_relative_eq;
    use risk_core::{RiskStatistics, ScenarioRecord};

    fn dataset(prices: &[f64]) -> ScenarioDataset {
        ScenarioDataset::from_records(
            prices
                .iter()
                .enumerate()
                .map(|(i, &p)| ScenarioRecord::new(i as u64, p))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_rejects_zero_bins() {
        assert!(ViewBuilder::new(0).is_err());
        assert_eq!(ViewBuilder::new(10).unwrap().bin_count(), 10);
        assert_eq!(ViewBuilder::default().bin_count(), 100);
    }

    #[test]
    fn test_histogram_bins_span_range() {
        let prices: Vec<f64> = (0..=100).map(|i| 100.0 + f64::from(i)).collect();
        let data = dataset(&prices);
        let summary = RiskStatistics::compute(&data).unwrap();
        let view = ViewBuilder::new(10).unwrap().histogram(&data, &summary).unwrap();

        assert_eq!(view.bins.len(), 10);
        assert_relative_eq!(view.bin_width, 10.0);
        assert_eq!(view.bins[0].lower, 100.0);
        assert_eq!(view.bins[9].upper, 200.0);
        assert_eq!(view.total_count(), 101);
        // Last bin is closed on the right: 190..=200 holds 11 values.
        assert_eq!(view.bins[9].count, 11);
        assert_eq!(view.bins[0].count, 10);
    }

    #[test]
    fn test_histogram_markers() {
        let prices: Vec<f64> = (1..=100).map(f64::from).collect();
        let data = dataset(&prices);
        let summary = RiskStatistics::compute(&data).unwrap();
        let view = ViewBuilder::default().histogram(&data, &summary).unwrap();

        let var = view.marker(MarkerKind::ValueAtRisk).unwrap();
        let mean = view.marker(MarkerKind::Mean).unwrap();
        assert_eq!(var.position, summary.var_95);
        assert_eq!(var.label, "VaR 95%: $5.95");
        assert_eq!(mean.position, 50.5);
        assert_eq!(mean.label, "Mean: $50.50");
        assert_eq!(view.tail.count, 5);
        assert_eq!(view.title, "Distribution of Final Prices (N=100)");
    }

    #[test]
    fn test_histogram_zero_range_single_bin() {
        let data = dataset(&[100.0; 4]);
        let summary = RiskStatistics::compute(&data).unwrap();
        let view = ViewBuilder::default().histogram(&data, &summary).unwrap();

        assert_eq!(view.bins.len(), 1);
        assert_eq!(view.bins[0].count, 4);
        assert_eq!(view.bin_width, 0.0);
    }

    #[test]
    fn test_histogram_rejects_foreign_summary() {
        let data = dataset(&[1.0, 2.0, 3.0]);
        let other = RiskStatistics::compute_prices(&[1.0, 2.0]).unwrap();
        let err = ViewBuilder::default().histogram(&data, &other).unwrap_err();
        assert!(matches!(err, RiskError::InvalidParameter { name: "summary", .. }));
    }

    #[test]
    fn test_histogram_empty_dataset() {
        let data = ScenarioDataset::default();
        let summary = RiskStatistics::compute_prices(&[1.0]).unwrap();
        let err = ViewBuilder::default().histogram(&data, &summary).unwrap_err();
        assert_eq!(err, RiskError::EmptyDataset);
    }
}
