//! 3-D scatter descriptor for sampled scenarios.

use risk_scenarios::ScenarioSample;
use serde::Serialize;

use crate::format::format_count;

/// Scatter descriptor with column-oriented coordinates.
///
/// Built from a [`ScenarioSample`] only, which bounds the number of points
/// handed to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScatterView {
    /// Chart title including the sample size.
    pub title: String,
    /// `simulation_index` axis label.
    pub x_label: String,
    /// `final_price` axis label.
    pub y_label: String,
    /// `deviation` axis label.
    pub z_label: String,
    /// Colour channel label.
    pub color_label: String,
    /// `simulation_index` of each point.
    pub x: Vec<u64>,
    /// `final_price` of each point.
    pub y: Vec<f64>,
    /// `deviation` of each point.
    pub z: Vec<f64>,
    /// Colour value of each point (the final price).
    pub color: Vec<f64>,
}

impl ScatterView {
    /// Build the descriptor from a sample, preserving draw order.
    pub fn from_sample(sample: &ScenarioSample) -> Self {
        let n = sample.len();
        let mut x = Vec::with_capacity(n);
        let mut y = Vec::with_capacity(n);
        let mut z = Vec::with_capacity(n);

        for record in sample.iter() {
            x.push(record.simulation_index);
            y.push(record.final_price);
            z.push(record.deviation);
        }

        Self {
            title: format!(
                "3-D Scenario Dispersion (Sample n={})",
                format_count(n)
            ),
            x_label: "Simulation Index".to_string(),
            y_label: "Final Price ($)".to_string(),
            z_label: "Deviation (Z-Score)".to_string(),
            color_label: "Final Price ($)".to_string(),
            color: y.clone(),
            x,
            y,
            z,
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Check if the scatter has no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
