//! mcrisk CLI - Risk analysis of Monte Carlo scenario datasets
//!
//! This is the operational entry point for the risk analysis crates.
//!
//! # Exit codes
//!
//! `0` success, `2` dataset not found, `3` schema violation, `4` empty or
//! single-row dataset, `5` degenerate distribution, `1` any other failure.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use adapter_loader::DatasetCache;
use clap::{Args, Parser, Subcommand};
use infra_config::{build_config, CliOverrides, LogLevel, OutputFormat};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use service_cli::commands::{self, demo::DemoOptions};
use service_cli::Result;

/// Monte Carlo scenario risk analysis
#[derive(Parser)]
#[command(name = "mcrisk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging unless a level is given)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (defaults to ./mcrisk.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    #[command(flatten)]
    analysis: AnalysisArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Per-run analysis overrides
#[derive(Args)]
struct AnalysisArgs {
    /// Scenario dataset CSV
    #[arg(short, long, global = true)]
    dataset: Option<PathBuf>,

    /// Rows drawn for the 3-D view
    #[arg(long, global = true)]
    sample_size: Option<usize>,

    /// Sampling seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Histogram bin count
    #[arg(long, global = true)]
    bins: Option<usize>,

    /// Confidence level of the additional VaR figure
    #[arg(long, global = true)]
    confidence: Option<f64>,

    /// Multiplier on VaR 95% giving the monitoring trigger
    #[arg(long, global = true)]
    trigger_factor: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the risk summary of a dataset
    Summary,

    /// Build histogram and 3-D scatter descriptors as JSON
    Views {
        /// Write the bundle to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check configuration and the dataset file contract
    Check,

    /// Generate a synthetic GBM dataset and analyse it
    Demo {
        /// Output directory
        #[arg(long, default_value = "demo-output")]
        dir: PathBuf,

        /// Number of simulated paths
        #[arg(long, default_value_t = 100_000)]
        rows: usize,

        /// Time steps per path
        #[arg(long, default_value_t = 252)]
        steps: usize,

        /// Seed of the path generator
        #[arg(long, default_value_t = 7)]
        path_seed: u64,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_file: self.config.clone(),
            dataset_path: self.analysis.dataset.clone(),
            sample_size: self.analysis.sample_size,
            seed: self.analysis.seed,
            bin_count: self.analysis.bins,
            confidence_level: self.analysis.confidence,
            trigger_factor: self.analysis.trigger_factor,
            log_level: self
                .log_level
                .or(if self.verbose { Some(LogLevel::Debug) } else { None }),
            output_format: self.format,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli.overrides())?;

    // Initialise tracing
    init_tracing(config.log_level.as_filter_str());
    info!(
        dataset = %config.dataset_path.display(),
        sample_size = config.sample_size,
        seed = config.seed,
        bins = config.bin_count,
        "mcrisk v{}",
        env!("CARGO_PKG_VERSION")
    );

    let cache = DatasetCache::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Summary => commands::summary::run(&config, &cache, &mut out).map(|_| ()),
        Commands::Views { output } => {
            commands::views::run(&config, &cache, output.as_deref(), &mut out).map(|_| ())
        }
        Commands::Check => commands::check::run(&config, &cache, &mut out).map(|_| ()),
        Commands::Demo {
            dir,
            rows,
            steps,
            path_seed,
        } => {
            let options = DemoOptions {
                dir,
                rows,
                steps,
                path_seed,
            };
            commands::demo::run(&config, &cache, &options, &mut out)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}
