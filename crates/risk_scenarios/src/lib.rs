//! # Risk Scenarios (P: Kernel)
//!
//! Scenario-level analysis on top of the statistics engine:
//!
//! - [`ScenarioSampler`]: fixed-size, seeded subsample for visualisation
//! - [`deviation`]: z-score of a price against the full-population summary
//! - [`TailCrossings`]: scenarios at or below a threshold such as `var_95`
//!
//! The deviation score is a visual depth axis, not a modelled quantity, so
//! it lives here rather than in `risk_core`.
//!
//! ## Example
//!
//! ```
//! use risk_core::{RiskStatistics, ScenarioDataset, ScenarioRecord};
//! use risk_scenarios::{SampleConfig, ScenarioSampler};
//!
//! let dataset = ScenarioDataset::from_records(
//!     (0..10).map(|i| ScenarioRecord::new(i, 90.0 + i as f64)).collect(),
//! )
//! .unwrap();
//! let summary = RiskStatistics::compute(&dataset).unwrap();
//!
//! let sampler = ScenarioSampler::new(SampleConfig::new(4, 42));
//! let sample = sampler.sample(&dataset, &summary).unwrap();
//! assert_eq!(sample.len(), 4);
//! ```

#![deny(missing_docs)]

mod rng;
mod sampler;
mod tail;

pub use rng::SamplingRng;
pub use sampler::{
    deviation, SampleConfig, SampledScenario, ScenarioSample, ScenarioSampler,
    DEFAULT_SAMPLE_SIZE, DEFAULT_SEED,
};
pub use tail::TailCrossings;
