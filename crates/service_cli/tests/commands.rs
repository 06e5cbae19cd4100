//! Integration tests for the mcrisk commands.

use std::path::{Path, PathBuf};

use adapter_loader::{DatasetCache, DEFAULT_DATASET_FILE};
use demo_inputs::{GbmConfig, GbmScenarioGenerator};
use infra_config::{AnalysisConfig, OutputFormat};
use risk_core::RiskError;
use service_cli::commands::{check, demo, summary, views};
use service_cli::CliError;
use tempfile::TempDir;

fn generated_dataset(dir: &Path, rows: usize) -> PathBuf {
    let path = dir.join(DEFAULT_DATASET_FILE);
    let config = GbmConfig {
        num_simulations: rows,
        num_steps: 12,
        ..Default::default()
    };
    GbmScenarioGenerator::new(config, 11)
        .unwrap()
        .write_csv(&path)
        .unwrap();
    path
}

fn config_for(path: PathBuf) -> AnalysisConfig {
    AnalysisConfig {
        dataset_path: path,
        sample_size: 200,
        bin_count: 40,
        ..Default::default()
    }
}

// =============================================================================
// summary
// =============================================================================

#[test]
fn test_summary_table_output() {
    let dir = TempDir::new().unwrap();
    let config = config_for(generated_dataset(dir.path(), 5_000));
    let mut out = Vec::new();

    let report = summary::run(&config, &DatasetCache::new(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(report.summary.count, 5_000);
    assert!(report.summary.var_95 < report.summary.mean_price);
    assert!(text.starts_with("Scenario risk summary"));
    assert!(text.contains("5,000"));
    assert!(text.contains("Monitoring trigger"));
}

#[test]
fn test_summary_json_output() {
    let dir = TempDir::new().unwrap();
    let config = AnalysisConfig {
        output_format: OutputFormat::Json,
        ..config_for(generated_dataset(dir.path(), 1_000))
    };
    let mut out = Vec::new();

    summary::run(&config, &DatasetCache::new(), &mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(json["summary"]["count"], 1_000);
    assert_eq!(json["var_at_confidence"]["confidence_level"], 0.95);
}

#[test]
fn test_summary_missing_dataset_exit_code() {
    let dir = TempDir::new().unwrap();
    let config = config_for(dir.path().join("absent.csv"));

    let err = summary::run(&config, &DatasetCache::new(), &mut Vec::new()).unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_summary_single_row_is_insufficient() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("one.csv");
    std::fs::write(&path, "simulation_index,final_price\n0,100\n").unwrap();

    let err = summary::run(&config_for(path), &DatasetCache::new(), &mut Vec::new()).unwrap_err();
    assert!(matches!(
        err,
        CliError::Risk(RiskError::InsufficientData { count: 1 })
    ));
    assert_eq!(err.exit_code(), 4);
}

// =============================================================================
// views
// =============================================================================

#[test]
fn test_views_bundle_to_file() {
    let dir = TempDir::new().unwrap();
    let config = config_for(generated_dataset(dir.path(), 3_000));
    let output = dir.path().join("bundle.json");
    let mut out = Vec::new();

    let bundle = views::run(&config, &DatasetCache::new(), Some(&output), &mut out).unwrap();

    assert_eq!(bundle.views.histogram.total_count(), 3_000);
    assert_eq!(bundle.views.scatter.len(), 200);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["views"]["histogram"]["bins"].as_array().unwrap().len(), 40);
    assert_eq!(json["views"]["scatter"]["x"].as_array().unwrap().len(), 200);
    assert_eq!(json["seed"], 42);
    assert!(json["generated_at"].is_string());
}

#[test]
fn test_views_are_reproducible_across_runs() {
    let dir = TempDir::new().unwrap();
    let config = config_for(generated_dataset(dir.path(), 2_500));

    let a = views::run(&config, &DatasetCache::new(), None, &mut Vec::new()).unwrap();
    let b = views::run(&config, &DatasetCache::new(), None, &mut Vec::new()).unwrap();

    assert_eq!(a.views, b.views);
}

#[test]
fn test_views_degenerate_dataset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flat.csv");
    std::fs::write(&path, "simulation_index,final_price\n0,100\n1,100\n").unwrap();

    let err = views::run(&config_for(path), &DatasetCache::new(), None, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::Risk(RiskError::DegenerateDistribution)));
    assert_eq!(err.exit_code(), 5);
}

// =============================================================================
// check
// =============================================================================

#[test]
fn test_check_reports_rows() {
    let dir = TempDir::new().unwrap();
    let config = config_for(generated_dataset(dir.path(), 150));
    let mut out = Vec::new();

    let report = check::run(&config, &DatasetCache::new(), &mut out).unwrap();

    assert_eq!(report.rows, 150);
    assert!(report.sample_covers_population);
    assert!(String::from_utf8(out).unwrap().contains("Dataset OK"));
}

#[test]
fn test_check_schema_and_empty_exit_codes() {
    let dir = TempDir::new().unwrap();
    let bad = dir.path().join("bad.csv");
    std::fs::write(&bad, "index,price\n0,1\n").unwrap();
    let empty = dir.path().join("empty.csv");
    std::fs::write(&empty, "simulation_index,final_price\n").unwrap();

    let cache = DatasetCache::new();
    let schema = check::run(&config_for(bad), &cache, &mut Vec::new()).unwrap_err();
    let empty = check::run(&config_for(empty), &cache, &mut Vec::new()).unwrap_err();

    assert_eq!(schema.exit_code(), 3);
    assert_eq!(empty.exit_code(), 4);
}

// =============================================================================
// demo
// =============================================================================

#[test]
fn test_demo_end_to_end() {
    let dir = TempDir::new().unwrap();
    let options = demo::DemoOptions {
        dir: dir.path().join("run"),
        rows: 4_000,
        steps: 12,
        path_seed: 7,
    };
    let mut out = Vec::new();

    demo::run(&AnalysisConfig::default(), &DatasetCache::new(), &options, &mut out).unwrap();

    assert!(options.dir.join(DEFAULT_DATASET_FILE).is_file());
    assert!(options.dir.join(demo::VIEW_BUNDLE_FILE).is_file());
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("[Demo] Generating 4,000 GBM paths"));
    assert!(text.contains("Scenario risk summary"));
}
