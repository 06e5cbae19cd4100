//! Summary command implementation

use std::io::Write;

use adapter_loader::DatasetCache;
use infra_config::{AnalysisConfig, OutputFormat};

use crate::pipeline::Analysis;
use crate::report::SummaryReport;
use crate::Result;

/// Run the summary command
pub fn run<W: Write>(config: &AnalysisConfig, cache: &DatasetCache, out: &mut W) -> Result<SummaryReport> {
    let analysis = Analysis::run(config, cache)?;
    let report = analysis.summary_report(config)?;

    match config.output_format {
        OutputFormat::Table => report.write_table(out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(report)
}
