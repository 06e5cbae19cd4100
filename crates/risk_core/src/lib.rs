//! # Risk Core (P: Kernel)
//!
//! Data model and statistics engine for the outcomes of a Monte Carlo
//! simulation of an asset price process.
//!
//! This crate provides:
//! - [`ScenarioDataset`]: the immutable, ordered set of simulated outcomes
//! - [`RiskStatistics`]: mean, sample standard deviation and empirical VaR
//! - [`RiskError`]: the error taxonomy shared by every pipeline stage
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             risk_core (P)               │
//! ├─────────────────────────────────────────┤
//! │  dataset/  - ScenarioRecord, Dataset    │
//! │  stats/    - estimators, RiskSummary    │
//! │  error/    - RiskError                  │
//! └─────────────────────────────────────────┘
//!          ↑                    ↑
//!   adapter_loader       risk_scenarios / risk_views
//! ```
//!
//! The statistics engine carries no presentation-driven fields: deviation
//! scores and view descriptors live in `risk_scenarios` and `risk_views`.
//!
//! ## Example
//!
//! ```
//! use risk_core::{RiskStatistics, ScenarioDataset, ScenarioRecord};
//!
//! let dataset = ScenarioDataset::from_records(vec![
//!     ScenarioRecord::new(0, 90.0),
//!     ScenarioRecord::new(1, 100.0),
//!     ScenarioRecord::new(2, 110.0),
//! ])
//! .unwrap();
//!
//! let summary = RiskStatistics::compute(&dataset).unwrap();
//! assert_eq!(summary.mean_price, 100.0);
//! assert_eq!(summary.std_dev, 10.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod dataset;
pub mod error;
pub mod stats;

pub use dataset::{ScenarioDataset, ScenarioRecord};
pub use error::{Result, RiskError};
pub use stats::{RiskStatistics, RiskSummary, VarEstimate, DEFAULT_CONFIDENCE};
