//! Threshold crossings.

use risk_core::{Result, RiskError, ScenarioDataset};
use serde::Serialize;

/// Scenarios whose final price falls at or below a threshold.
///
/// With `threshold = var_95` this is the adverse 5% tail the VaR figure
/// describes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TailCrossings {
    /// Threshold price.
    pub threshold: f64,
    /// Number of scenarios at or below the threshold.
    pub count: usize,
    /// Number of scenarios in the dataset.
    pub population: usize,
    /// `count / population`.
    pub share: f64,
}

impl TailCrossings {
    /// Count scenarios with `final_price <= threshold`.
    ///
    /// # Errors
    ///
    /// [`RiskError::EmptyDataset`] when the dataset has no rows.
    pub fn at_or_below(dataset: &ScenarioDataset, threshold: f64) -> Result<Self> {
        if dataset.is_empty() {
            return Err(RiskError::EmptyDataset);
        }

        let count = dataset
            .iter()
            .filter(|r| r.final_price <= threshold)
            .count();

        Ok(Self {
            threshold,
            count,
            population: dataset.len(),
            share: count as f64 / dataset.len() as f64,
        })
    }
}
