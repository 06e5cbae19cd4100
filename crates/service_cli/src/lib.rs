//! # mcrisk
//!
//! Command-line risk analysis of Monte Carlo scenario datasets.
//!
//! # Commands
//!
//! - `mcrisk summary` - Mean, standard deviation, VaR and monitoring trigger
//! - `mcrisk views` - Histogram and 3-D scatter descriptors as JSON
//! - `mcrisk check` - Validate configuration and the dataset file contract
//! - `mcrisk demo` - Generate a synthetic dataset and analyse it
//!
//! # Architecture
//!
//! As part of the **S**ervice layer in the A-I-P-S architecture, this crate
//! wires the loader, configuration and risk kernel crates together.

pub mod commands;
pub mod error;
pub mod pipeline;
pub mod report;

pub use error::{CliError, Result};
pub use pipeline::Analysis;
pub use report::{SummaryReport, ViewBundle};
