//! # Upstream Systems
//!
//! Stand-in for the external simulation engine that feeds the risk
//! analysis tools.
//!
//! The generator evolves Geometric Brownian Motion paths and writes the
//! terminal prices in the `simulation_index,final_price` file contract
//! read by `adapter_loader`. It exists so demos and tests can produce
//! realistic datasets; the analysis pipeline never depends on it.
//!
//! ## Modules
//!
//! - [`model`]: price evolution step
//! - [`config`]: validated simulation parameters
//! - [`generator`]: seeded path generation and CSV output
//!
//! ## Example
//!
//! ```
//! use demo_inputs::{GbmConfig, GbmScenarioGenerator};
//!
//! let config = GbmConfig {
//!     num_simulations: 1_000,
//!     num_steps: 12,
//!     ..GbmConfig::default()
//! };
//! let records = GbmScenarioGenerator::new(config, 42).unwrap().generate();
//!
//! assert_eq!(records.len(), 1_000);
//! assert!(records.iter().all(|r| r.final_price > 0.0));
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;

pub use config::GbmConfig;
pub use error::GeneratorError;
pub use generator::GbmScenarioGenerator;
pub use model::RandomWalkModel;
