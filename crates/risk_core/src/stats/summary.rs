//! Risk summary computation.

use serde::Serialize;

use super::estimators::{mean, quantile_linear, sample_std_dev};
use crate::dataset::ScenarioDataset;
use crate::error::{Result, RiskError};

/// Confidence level of the headline VaR figure.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Summary statistics of the `final_price` column.
///
/// Recomputed from the dataset on every run and never cached across
/// datasets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RiskSummary {
    /// Number of scenarios the summary was computed from.
    pub count: usize,
    /// Arithmetic mean of `final_price`.
    pub mean_price: f64,
    /// Sample standard deviation (n−1) of `final_price`.
    pub std_dev: f64,
    /// Empirical 5th percentile of `final_price` (95% VaR threshold).
    pub var_95: f64,
    /// Smallest observed price.
    pub min_price: f64,
    /// Largest observed price.
    pub max_price: f64,
}

impl RiskSummary {
    /// Check if the distribution has no spread.
    pub fn is_degenerate(&self) -> bool {
        self.std_dev == 0.0
    }

    /// Observed price range (`max - min`).
    pub fn price_range(&self) -> f64 {
        self.max_price - self.min_price
    }
}

/// VaR threshold at an arbitrary confidence level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VarEstimate {
    /// Confidence level in (0, 1), e.g. 0.95.
    pub confidence_level: f64,
    /// Price at or below which `1 - confidence_level` of outcomes fall.
    pub threshold: f64,
}

/// Stateless statistics engine.
pub struct RiskStatistics;

impl RiskStatistics {
    /// Compute the summary of a dataset.
    ///
    /// # Errors
    ///
    /// - [`RiskError::EmptyDataset`] when the dataset has no rows
    /// - [`RiskError::InsufficientData`] when it has a single row
    pub fn compute(dataset: &ScenarioDataset) -> Result<RiskSummary> {
        Self::compute_prices(&dataset.prices())
    }

    /// Compute the summary of a raw price sequence.
    ///
    /// # Errors
    ///
    /// - [`RiskError::EmptyDataset`] on an empty slice
    /// - [`RiskError::InsufficientData`] on a single price
    /// - [`RiskError::Schema`] if any price is not finite
    pub fn compute_prices(prices: &[f64]) -> Result<RiskSummary> {
        let sorted = sorted_prices(prices)?;

        let mean_price = mean(prices).ok_or(RiskError::EmptyDataset)?;
        let std_dev = sample_std_dev(prices, mean_price).ok_or(RiskError::InsufficientData {
            count: prices.len(),
        })?;
        let var_95 =
            quantile_linear(&sorted, 1.0 - DEFAULT_CONFIDENCE).ok_or(RiskError::EmptyDataset)?;

        Ok(RiskSummary {
            count: prices.len(),
            mean_price,
            std_dev,
            var_95,
            min_price: sorted[0],
            max_price: sorted[sorted.len() - 1],
        })
    }

    /// Empirical VaR threshold at the given confidence level.
    ///
    /// # Errors
    ///
    /// - [`RiskError::InvalidParameter`] if `confidence_level` is not in (0, 1)
    /// - [`RiskError::EmptyDataset`] on an empty slice
    pub fn value_at_risk(prices: &[f64], confidence_level: f64) -> Result<VarEstimate> {
        if !(confidence_level > 0.0 && confidence_level < 1.0) {
            return Err(RiskError::invalid_parameter(
                "confidence_level",
                format!("must be in (0, 1), got {}", confidence_level),
            ));
        }

        let sorted = sorted_prices(prices)?;
        let threshold =
            quantile_linear(&sorted, 1.0 - confidence_level).ok_or(RiskError::EmptyDataset)?;

        Ok(VarEstimate {
            confidence_level,
            threshold,
        })
    }
}

fn sorted_prices(prices: &[f64]) -> Result<Vec<f64>> {
    if prices.is_empty() {
        return Err(RiskError::EmptyDataset);
    }
    if let Some(bad) = prices.iter().find(|p| !p.is_finite()) {
        return Err(RiskError::schema(format!(
            "final_price contains a non-finite value ({})",
            bad
        )));
    }

    let mut sorted = prices.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    Ok(sorted)
}
