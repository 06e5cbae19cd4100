//! Integration tests for diagnostic view descriptors.

use risk_core::{RiskStatistics, ScenarioDataset, ScenarioRecord};
use risk_scenarios::{SampleConfig, ScenarioSampler};
use risk_views::{MarkerKind, ViewBuilder};

fn skewed_dataset(rows: u64) -> ScenarioDataset {
    let records = (0..rows)
        .map(|i| {
            let u = ((i * 7_919) % 4_999) as f64 / 4_999.0;
            ScenarioRecord::new(i, 100.0 * (0.5 * (u - 0.4)).exp())
        })
        .collect();
    ScenarioDataset::from_records(records).unwrap()
}

#[test]
fn test_full_view_pipeline() {
    let dataset = skewed_dataset(4_999);
    let summary = RiskStatistics::compute(&dataset).unwrap();
    let sample = ScenarioSampler::new(SampleConfig::new(300, 42))
        .sample(&dataset, &summary)
        .unwrap();

    let views = ViewBuilder::default().build(&dataset, &summary, &sample).unwrap();

    // Histogram covers the whole population.
    assert_eq!(views.histogram.population, 4_999);
    assert_eq!(views.histogram.total_count(), 4_999);
    assert_eq!(views.histogram.bins.len(), 100);
    assert_eq!(views.histogram.title, "Distribution of Final Prices (N=4,999)");

    let var = views.histogram.marker(MarkerKind::ValueAtRisk).unwrap();
    let mean = views.histogram.marker(MarkerKind::Mean).unwrap();
    assert!(var.position < mean.position);

    // Scatter covers only the sample.
    assert_eq!(views.scatter.len(), 300);
    assert_eq!(views.scatter.title, "3-D Scenario Dispersion (Sample n=300)");
    assert_eq!(views.scatter.color, views.scatter.y);

    let sample_ids: Vec<u64> = sample.iter().map(|r| r.simulation_index).collect();
    assert_eq!(views.scatter.x, sample_ids);
}

#[test]
fn test_views_are_deterministic() {
    let dataset = skewed_dataset(2_000);
    let summary = RiskStatistics::compute(&dataset).unwrap();
    let sampler = ScenarioSampler::new(SampleConfig::new(100, 42));
    let builder = ViewBuilder::new(50).unwrap();

    let a = builder
        .build(&dataset, &summary, &sampler.sample(&dataset, &summary).unwrap())
        .unwrap();
    let b = builder
        .build(&dataset, &summary, &sampler.sample(&dataset, &summary).unwrap())
        .unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_views_serialise_to_json() {
    let dataset = skewed_dataset(500);
    let summary = RiskStatistics::compute(&dataset).unwrap();
    let sample = ScenarioSampler::new(SampleConfig::new(20, 42))
        .sample(&dataset, &summary)
        .unwrap();
    let views = ViewBuilder::new(10).unwrap().build(&dataset, &summary, &sample).unwrap();

    let json = serde_json::to_value(&views).unwrap();

    assert_eq!(json["histogram"]["bins"].as_array().unwrap().len(), 10);
    assert_eq!(json["histogram"]["markers"][0]["kind"], "value_at_risk");
    assert_eq!(json["histogram"]["markers"][1]["kind"], "mean");
    assert_eq!(json["scatter"]["z"].as_array().unwrap().len(), 20);
    assert_eq!(json["scatter"]["z_label"], "Deviation (Z-Score)");
}
