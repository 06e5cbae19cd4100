//! CSV scenario loader.

use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use risk_core::{Result, RiskError, ScenarioDataset, ScenarioRecord};
use tracing::{debug, info};

/// Conventional dataset file name written by the simulation engine.
pub const DEFAULT_DATASET_FILE: &str = "simulacion_riesgo.csv";

/// Column holding the path position.
pub const SIMULATION_INDEX_COLUMN: &str = "simulation_index";

/// Column holding the terminal price.
pub const FINAL_PRICE_COLUMN: &str = "final_price";

/// Load a dataset from a CSV file.
///
/// The file handle lives only inside this call and is released on every
/// return path, including schema failures.
///
/// # Errors
///
/// - [`RiskError::DatasetNotFound`] if `path` is not a readable regular file
/// - [`RiskError::Schema`] if a required column is missing or a value is
///   invalid
pub fn load_dataset(path: impl AsRef<Path>) -> Result<ScenarioDataset> {
    let path = path.as_ref();

    let metadata = fs::metadata(path).map_err(|e| RiskError::not_found(path, describe_io(&e)))?;
    if !metadata.is_file() {
        return Err(RiskError::not_found(path, "not a regular file"));
    }

    let file = File::open(path).map_err(|e| RiskError::not_found(path, describe_io(&e)))?;
    debug!(path = %path.display(), bytes = metadata.len(), "Reading scenario dataset");

    let dataset = read_dataset(BufReader::new(file), &path.display().to_string()).map_err(
        |err| match err {
            RiskError::DatasetNotFound { reason, .. } => RiskError::not_found(path, reason),
            other => other,
        },
    )?;

    info!(
        path = %path.display(),
        rows = dataset.len(),
        "Scenario dataset loaded"
    );
    Ok(dataset)
}

/// Parse a dataset from any CSV byte stream.
///
/// `source` names the stream in error messages.
pub fn read_dataset<R: Read>(reader: R, source: &str) -> Result<ScenarioDataset> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| csv_error(e, source))?
        .clone();
    let index_col = column_position(&headers, SIMULATION_INDEX_COLUMN, source)?;
    let price_col = column_position(&headers, FINAL_PRICE_COLUMN, source)?;

    let mut records = Vec::new();
    let mut row = StringRecord::new();

    while csv_reader
        .read_record(&mut row)
        .map_err(|e| csv_error(e, source))?
    {
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let simulation_index = parse_field::<u64>(&row, index_col, line, SIMULATION_INDEX_COLUMN, source)?;
        let final_price = parse_field::<f64>(&row, price_col, line, FINAL_PRICE_COLUMN, source)?;
        records.push(ScenarioRecord::new(simulation_index, final_price));
    }

    ScenarioDataset::from_records(records)
        .map_err(|err| match err {
            RiskError::Schema(msg) => RiskError::schema(format!("{}: {}", source, msg)),
            other => other,
        })
}

fn column_position(headers: &StringRecord, name: &str, source: &str) -> Result<usize> {
    headers.iter().position(|h| h == name).ok_or_else(|| {
        let found: Vec<&str> = headers.iter().collect();
        RiskError::schema(format!(
            "{}: missing required column '{}' (found: [{}])",
            source,
            name,
            found.join(", ")
        ))
    })
}

fn parse_field<T: std::str::FromStr>(
    row: &StringRecord,
    col: usize,
    line: u64,
    name: &str,
    source: &str,
) -> Result<T> {
    let raw = row.get(col).unwrap_or_default();
    raw.parse::<T>().map_err(|_| {
        RiskError::schema(format!(
            "{}: line {}: column '{}' holds non-numeric value '{}'",
            source, line, name, raw
        ))
    })
}

fn csv_error(err: csv::Error, source: &str) -> RiskError {
    let line = err.position().map(|p| p.line());
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => RiskError::not_found(source, describe_io(&io_err)),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => RiskError::schema(format!(
            "{}: line {}: expected {} fields, found {}",
            source,
            line.unwrap_or_default(),
            expected_len,
            len
        )),
        csv::ErrorKind::Utf8 { .. } => RiskError::schema(format!(
            "{}: line {}: invalid UTF-8",
            source,
            line.unwrap_or_default()
        )),
        _ => RiskError::schema(format!(
            "{}: malformed CSV near line {}",
            source,
            line.unwrap_or_default()
        )),
    }
}

fn describe_io(err: &io::Error) -> String {
    match err.kind() {
        io::ErrorKind::NotFound => "no such file".to_string(),
        io::ErrorKind::PermissionDenied => "permission denied".to_string(),
        _ => format!("read failed: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_minimal_contract() {
        let data = "simulation_index,final_price\n0,101.5\n1,98.25\n2,110.0\n";
        let dataset = read_dataset(data.as_bytes(), "inline").unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.prices(), vec![101.5, 98.25, 110.0]);
    }

    #[test]
    fn test_read_ignores_extra_columns_and_order() {
        let data = "final_price,path_id,simulation_index\n 120.0 ,a,5\n80.0,b,3\n";
        let dataset = read_dataset(data.as_bytes(), "inline").unwrap();

        let first = dataset.get(0).unwrap();
        assert_eq!(first.simulation_index, 5);
        assert_eq!(first.final_price, 120.0);
    }

    #[test]
    fn test_read_header_only_is_empty_dataset() {
        let dataset = read_dataset("simulation_index,final_price\n".as_bytes(), "inline").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_read_missing_price_column() {
        let err = read_dataset("simulation_index,price\n0,1.0\n".as_bytes(), "inline").unwrap_err();
        match err {
            RiskError::Schema(msg) => {
                assert!(msg.contains("missing required column 'final_price'"));
                assert!(msg.contains("found: [simulation_index, price]"));
            }
            other => panic!("Expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_empty_input_is_schema_error() {
        let err = read_dataset("".as_bytes(), "inline").unwrap_err();
        assert_eq!(err.kind(), "SchemaError");
    }

    #[test]
    fn test_read_non_numeric_price() {
        let data = "simulation_index,final_price\n0,100.0\n1,abc\n";
        let err = read_dataset(data.as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, RiskError::Schema(ref msg) if msg.contains("line 3") && msg.contains("'abc'")));
    }

    #[test]
    fn test_read_negative_index() {
        let data = "simulation_index,final_price\n-1,100.0\n";
        let err = read_dataset(data.as_bytes(), "inline").unwrap_err();
        assert_eq!(err.kind(), "SchemaError");
    }

    #[test]
    fn test_read_ragged_row() {
        let data = "simulation_index,final_price\n0,100.0\n1\n";
        let err = read_dataset(data.as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, RiskError::Schema(ref msg) if msg.contains("expected 2 fields")));
    }

    #[test]
    fn test_read_non_positive_price_names_source() {
        let data = "simulation_index,final_price\n0,-5.0\n";
        let err = read_dataset(data.as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, RiskError::Schema(ref msg) if msg.starts_with("inline: row 1")));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_dataset("definitely/not/here.csv").unwrap_err();
        match err {
            RiskError::DatasetNotFound { path, reason } => {
                assert_eq!(path, Path::new("definitely/not/here.csv"));
                assert_eq!(reason, "no such file");
            }
            other => panic!("Expected DatasetNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_directory_is_not_found() {
        let err = load_dataset(std::env::temp_dir()).unwrap_err();
        assert_eq!(err.kind(), "DatasetNotFound");
    }
}
