//! Histogram descriptor for the full-population price distribution.

use risk_core::{RiskSummary, ScenarioDataset};
use risk_scenarios::TailCrossings;
use serde::Serialize;

use crate::format::{format_count, format_price};

/// Which statistic a marker line represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// 95% Value-at-Risk threshold.
    ValueAtRisk,
    /// Mean final price.
    Mean,
}

/// Vertical threshold line on the histogram.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThresholdMarker {
    /// Statistic represented.
    pub kind: MarkerKind,
    /// Legend label, e.g. `VaR 95%: $74.16`.
    pub label: String,
    /// Position on the price axis.
    pub position: f64,
}

/// One equal-width bucket.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Inclusive lower edge.
    pub lower: f64,
    /// Upper edge, exclusive except for the last bin.
    pub upper: f64,
    /// Observations falling in the bucket.
    pub count: usize,
}

/// Histogram descriptor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistogramView {
    /// Chart title including the population size.
    pub title: String,
    /// Price axis label.
    pub x_label: String,
    /// Frequency axis label.
    pub y_label: String,
    /// Number of observations binned.
    pub population: usize,
    /// Width shared by every bin.
    pub bin_width: f64,
    /// Buckets spanning `[min_price, max_price]`.
    pub bins: Vec<HistogramBin>,
    /// VaR and mean markers, in that order.
    pub markers: Vec<ThresholdMarker>,
    /// Scenarios at or below the VaR marker.
    pub tail: TailCrossings,
}

impl HistogramView {
    /// Sum of all bucket counts; equals `population`.
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Marker of the given kind.
    pub fn marker(&self, kind: MarkerKind) -> Option<&ThresholdMarker> {
        self.markers.iter().find(|m| m.kind == kind)
    }
}

/// Bucket `dataset` into `bin_count` equal-width bins over the observed
/// price range.
///
/// Edges are fixed first and every observation is placed against those
/// edges, so a count always matches its bin's `[lower, upper)` range. A
/// zero-width range collapses to a single bin holding every observation.
pub(crate) fn bin_prices(
    dataset: &ScenarioDataset,
    summary: &RiskSummary,
    bin_count: usize,
) -> (f64, Vec<HistogramBin>) {
    let lo = summary.min_price;
    let hi = summary.max_price;

    if hi <= lo {
        let bin = HistogramBin {
            lower: lo,
            upper: hi,
            count: dataset.len(),
        };
        return (0.0, vec![bin]);
    }

    let width = (hi - lo) / bin_count as f64;
    let edges: Vec<f64> = (0..=bin_count)
        .map(|i| if i == bin_count { hi } else { lo + width * i as f64 })
        .collect();
    let mut counts = vec![0_usize; bin_count];

    for record in dataset {
        counts[bin_index(&edges, width, record.final_price)] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: edges[i],
            upper: edges[i + 1],
            count,
        })
        .collect();

    (width, bins)
}

/// Bin of `price` given `bin_count + 1` ascending edges.
///
/// The arithmetic guess can land one bin off when `price` sits on an edge,
/// so it is corrected against the edges themselves.
fn bin_index(edges: &[f64], width: f64, price: f64) -> usize {
    let last = edges.len() - 2;
    let offset = (price - edges[0]) / width;
    let mut idx = (offset.max(0.0) as usize).min(last);

    if idx > 0 && price < edges[idx] {
        idx -= 1;
    } else if idx < last && price >= edges[idx + 1] {
        idx += 1;
    }
    idx
}

pub(crate) fn markers(summary: &RiskSummary) -> Vec<ThresholdMarker> {
    vec![
        ThresholdMarker {
            kind: MarkerKind::ValueAtRisk,
            label: format!("VaR 95%: {}", format_price(summary.var_95)),
            position: summary.var_95,
        },
        ThresholdMarker {
            kind: MarkerKind::Mean,
            label: format!("Mean: {}", format_price(summary.mean_price)),
            position: summary.mean_price,
        },
    ]
}

pub(crate) fn title(population: usize) -> String {
    format!(
        "Distribution of Final Prices (N={})",
        format_count(population)
    )
}
