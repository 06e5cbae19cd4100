//! Risk statistics engine.
//!
//! Computes the [`RiskSummary`] of a scenario dataset. This is the single
//! statistics implementation consumed by both the textual summary and the
//! diagnostic views.
//!
//! ## Conventions
//!
//! - mean: arithmetic mean, Neumaier compensated summation
//! - standard deviation: sample convention (n−1 denominator)
//! - VaR: empirical quantile with linear interpolation between order
//!   statistics (Hyndman & Fan type 7)

mod estimators;
mod summary;

pub use estimators::{compensated_sum, mean, quantile_linear, sample_std_dev};
pub use summary::{RiskStatistics, RiskSummary, VarEstimate, DEFAULT_CONFIDENCE};
