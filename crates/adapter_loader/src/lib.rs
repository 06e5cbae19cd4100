//! # Adapter Loader (A: Input)
//!
//! Reads the scenario dataset produced by the external simulation engine.
//!
//! ## File contract
//!
//! A CSV file with a header row and at least these columns (any order,
//! extra columns ignored):
//!
//! | column             | type                  |
//! |--------------------|-----------------------|
//! | `simulation_index` | non-negative integer  |
//! | `final_price`      | positive float        |
//!
//! Row order is the simulation order and is preserved.
//!
//! ## Modules
//!
//! - [`csv_loader`]: one-shot load of a dataset
//! - [`cache`]: memoization keyed by file identity (path, mtime, length)

pub mod cache;
pub mod csv_loader;

pub use cache::{DatasetCache, FileIdentity};
pub use csv_loader::{
    load_dataset, read_dataset, DEFAULT_DATASET_FILE, FINAL_PRICE_COLUMN,
    SIMULATION_INDEX_COLUMN,
};
