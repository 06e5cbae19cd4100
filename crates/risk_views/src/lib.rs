//! # Risk Views (P: Kernel)
//!
//! Builds declarative descriptors for the two diagnostic charts of a
//! scenario risk report. Nothing here draws; the presentation layer
//! receives plain, serialisable data:
//!
//! - [`HistogramView`]: full-population price distribution with VaR and
//!   mean markers
//! - [`ScatterView`]: sampled scenarios on `simulation_index`,
//!   `final_price` and `deviation` axes, coloured by `final_price`

#![deny(missing_docs)]

mod builder;
mod format;
mod histogram;
mod scatter;

pub use builder::{DiagnosticViews, ViewBuilder, DEFAULT_BIN_COUNT};
pub use format::{format_count, format_price};
pub use histogram::{HistogramBin, HistogramView, MarkerKind, ThresholdMarker};
pub use scatter::ScatterView;
