//! Views command implementation
//!
//! Builds the histogram and scatter descriptors and writes them as one JSON
//! bundle, either to a file or to the given writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use adapter_loader::DatasetCache;
use infra_config::AnalysisConfig;
use tracing::info;

use crate::pipeline::Analysis;
use crate::report::ViewBundle;
use crate::Result;

/// Run the views command
pub fn run<W: Write>(
    config: &AnalysisConfig,
    cache: &DatasetCache,
    output: Option<&Path>,
    out: &mut W,
) -> Result<ViewBundle> {
    let analysis = Analysis::run(config, cache)?;
    let views = analysis.diagnostic_views(config)?;
    let bundle = ViewBundle::new(config, analysis.summary, views);

    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, &bundle)?;
            writer.flush()?;
            info!(path = %path.display(), "View bundle written");
            writeln!(out, "View bundle written to {}", path.display())?;
        }
        None => {
            serde_json::to_writer_pretty(&mut *out, &bundle)?;
            writeln!(out)?;
        }
    }
    Ok(bundle)
}
