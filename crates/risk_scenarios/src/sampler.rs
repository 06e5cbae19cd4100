//! Reproducible scenario sampling.
//!
//! Rendering a million points is not tractable, so the 3-D view works on a
//! fixed-size subsample drawn without replacement from a seeded PRNG. Each
//! sampled record carries a deviation score computed against the
//! full-population summary, never the sample's own statistics.

use risk_core::{Result, RiskError, RiskSummary, ScenarioDataset};
use serde::Serialize;
use tracing::{debug, info};

use crate::rng::SamplingRng;

/// Default number of sampled scenarios.
pub const DEFAULT_SAMPLE_SIZE: usize = 2_000;

/// Default sampling seed.
pub const DEFAULT_SEED: u64 = 42;

/// Sampling parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleConfig {
    /// Target number of scenarios.
    pub sample_size: usize,
    /// PRNG seed.
    pub seed: u64,
}

impl SampleConfig {
    /// Create sampling parameters.
    pub fn new(sample_size: usize, seed: u64) -> Self {
        Self { sample_size, seed }
    }
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_SIZE, DEFAULT_SEED)
    }
}

/// A sampled scenario with its deviation score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SampledScenario {
    /// Original position of the path in the simulation run.
    pub simulation_index: u64,
    /// Asset price at the end of the horizon.
    pub final_price: f64,
    /// `(final_price - mean_price) / std_dev` against the full population.
    pub deviation: f64,
}

/// Subsample of a dataset used for visualisation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioSample {
    /// Requested sample size.
    pub sample_size: usize,
    /// Seed the sample was drawn with.
    pub seed: u64,
    /// Number of rows in the dataset the sample was drawn from.
    pub population: usize,
    /// Sampled scenarios, in draw order.
    pub records: Vec<SampledScenario>,
}

impl ScenarioSample {
    /// Number of sampled scenarios.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the sample holds no scenarios.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over sampled scenarios in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &SampledScenario> {
        self.records.iter()
    }

    /// Check if sampling degenerated to the whole dataset.
    pub fn is_full_population(&self) -> bool {
        self.records.len() == self.population
    }
}

/// Deviation score of a price against the population summary.
///
/// # Errors
///
/// [`RiskError::DegenerateDistribution`] when the standard deviation is zero
/// (or not a usable positive number), instead of returning an infinite or
/// undefined score.
pub fn deviation(final_price: f64, summary: &RiskSummary) -> Result<f64> {
    if !(summary.std_dev > 0.0 && summary.std_dev.is_finite()) {
        return Err(RiskError::DegenerateDistribution);
    }
    Ok((final_price - summary.mean_price) / summary.std_dev)
}

/// Draws reproducible subsamples from a dataset.
#[derive(Clone, Debug, Default)]
pub struct ScenarioSampler {
    config: SampleConfig,
}

impl ScenarioSampler {
    /// Create a sampler with the given parameters.
    pub fn new(config: SampleConfig) -> Self {
        Self { config }
    }

    /// Sampling parameters.
    pub fn config(&self) -> &SampleConfig {
        &self.config
    }

    /// Row positions selected for a dataset of `population` rows.
    ///
    /// If `sample_size >= population` every row is selected once, in
    /// original order. Otherwise rows are drawn without replacement and
    /// returned in draw order.
    pub fn select_rows(&self, population: usize) -> Vec<usize> {
        if self.config.sample_size >= population {
            return (0..population).collect();
        }
        SamplingRng::from_seed(self.config.seed).choose_rows(population, self.config.sample_size)
    }

    /// Draw the sample and score every record.
    ///
    /// `summary` must have been computed from `dataset`.
    ///
    /// # Errors
    ///
    /// - [`RiskError::InvalidParameter`] if `sample_size` is zero or the
    ///   summary does not belong to the dataset
    /// - [`RiskError::DegenerateDistribution`] if `summary.std_dev` is zero
    pub fn sample(&self, dataset: &ScenarioDataset, summary: &RiskSummary) -> Result<ScenarioSample> {
        if self.config.sample_size == 0 {
            return Err(RiskError::invalid_parameter(
                "sample_size",
                "must be greater than 0",
            ));
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
        // Fail before drawing so no partial sample escapes.
        deviation(summary.mean_price, summary)?;

        let rows = self.select_rows(dataset.len());
        debug!(
            selected = rows.len(),
            population = dataset.len(),
            "Sample rows selected"
        );

        let records = rows
            .into_iter()
            .filter_map(|row| dataset.get(row))
            .map(|record| {
                Ok(SampledScenario {
                    simulation_index: record.simulation_index,
                    final_price: record.final_price,
                    deviation: deviation(record.final_price, summary)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        info!(
            sample_size = self.config.sample_size,
            seed = self.config.seed,
            drawn = records.len(),
            population = dataset.len(),
            "Scenario sample drawn"
        );

        Ok(ScenarioSample {
            sample_size: self.config.sample_size,
            seed: self.config.seed,
            population: dataset.len(),
            records,
        })
    }
}
