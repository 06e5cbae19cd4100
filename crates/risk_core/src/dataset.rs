//! Scenario dataset model.
//!
//! A [`ScenarioDataset`] is created once per load and is immutable
//! afterwards. Row order is the original simulation order and is preserved
//! because downstream views use it as an axis.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{Result, RiskError};

/// A single simulated outcome.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScenarioRecord {
    /// Position of the path in the simulation run.
    pub simulation_index: u64,
    /// Asset price at the end of the horizon.
    pub final_price: f64,
}

impl ScenarioRecord {
    /// Create a new scenario record.
    pub fn new(simulation_index: u64, final_price: f64) -> Self {
        Self {
            simulation_index,
            final_price,
        }
    }
}

/// Ordered, immutable set of simulated outcomes.
///
/// # Invariants
///
/// - every `final_price` is finite and strictly positive
/// - every `simulation_index` is unique within the dataset
///
/// An empty dataset is representable; the statistics engine rejects it
/// with [`RiskError::EmptyDataset`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScenarioDataset {
    records: Vec<ScenarioRecord>,
}

impl ScenarioDataset {
    /// Build a dataset, validating the record invariants.
    ///
    /// # Errors
    ///
    /// [`RiskError::Schema`] on a non-positive or non-finite price, or on a
    /// repeated `simulation_index`.
    pub fn from_records(records: Vec<ScenarioRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());

        for (row, record) in records.iter().enumerate() {
            if !record.final_price.is_finite() || record.final_price <= 0.0 {
                return Err(RiskError::schema(format!(
                    "row {}: final_price must be a positive finite number, got {}",
                    row + 1,
                    record.final_price
                )));
            }
            if !seen.insert(record.simulation_index) {
                return Err(RiskError::schema(format!(
                    "row {}: duplicate simulation_index {}",
                    row + 1,
                    record.simulation_index
                )));
            }
        }

        Ok(Self { records })
    }

    /// Number of scenarios.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset holds no scenarios.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in simulation order.
    pub fn records(&self) -> &[ScenarioRecord] {
        &self.records
    }

    /// Record at the given row position.
    pub fn get(&self, row: usize) -> Option<&ScenarioRecord> {
        self.records.get(row)
    }

    /// Iterate over records in simulation order.
    pub fn iter(&self) -> impl Iterator<Item = &ScenarioRecord> {
        self.records.iter()
    }

    /// Copy of the `final_price` column in simulation order.
    pub fn prices(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.final_price).collect()
    }
}

impl<'a> IntoIterator for &'a ScenarioDataset {
    type Item = &'a ScenarioRecord;
    type IntoIter = std::slice::Iter<'a, ScenarioRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
