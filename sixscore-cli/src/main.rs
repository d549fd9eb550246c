//! SixScore CLI: score price/volume histories from the command line.
//!
//! Commands:
//! - `analyze`: score one CSV file (or a synthetic series) and print the report
//! - `batch`: score many CSV files in parallel and write JSON reports
//! - `config`: print the default (or an effective) scoring config as TOML

mod logging;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use sixscore_runner::{
    export_json, load_config_or_default, load_csv, synthetic_series, write_batch, Runner,
};

#[derive(Parser)]
#[command(
    name = "sixscore",
    version,
    about = "SixScore CLI: six-strategy technical-analysis scoring"
)]
struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true, default_value_t = false)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one series and print its report as JSON.
    Analyze {
        /// CSV file with close/price and volume columns.
        #[arg(required_unless_present = "synthetic")]
        csv: Option<PathBuf>,

        /// Symbol for the report. Defaults to the file stem.
        #[arg(long)]
        symbol: Option<String>,

        /// Scoring config (TOML). Defaults to built-in weights and bands.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pretty-print the JSON report.
        #[arg(long, default_value_t = false)]
        pretty: bool,

        /// Developer mode: score a seeded random walk of N periods instead of a file.
        #[arg(long, value_name = "N", conflicts_with = "csv")]
        synthetic: Option<usize>,
    },
    /// Score many CSV files; writes <symbol>.json per success and summary.json.
    Batch {
        /// CSV files; each file stem is used as the symbol.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Scoring config (TOML).
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output directory for reports.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,

        /// Analyze one file at a time instead of in parallel.
        #[arg(long, default_value_t = false)]
        sequential: bool,
    },
    /// Print the scoring config as TOML.
    Config {
        /// Merge this file over the defaults and validate it.
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_json);

    match cli.command {
        Commands::Analyze {
            csv,
            symbol,
            config,
            pretty,
            synthetic,
        } => run_analyze(csv, symbol, config, pretty, synthetic),
        Commands::Batch {
            files,
            config,
            output_dir,
            sequential,
        } => run_batch(&files, config.as_deref(), &output_dir, sequential),
        Commands::Config { path } => run_config(path.as_deref()),
    }
}

fn run_analyze(
    csv: Option<PathBuf>,
    symbol: Option<String>,
    config_path: Option<PathBuf>,
    pretty: bool,
    synthetic: Option<usize>,
) -> Result<()> {
    let config = load_config_or_default(config_path.as_deref())?;
    let runner = Runner::new(config)?;

    let loaded = match (synthetic, csv) {
        (Some(periods), _) => synthetic_series(symbol.as_deref().unwrap_or("SYNTHETIC"), periods),
        (None, Some(path)) => load_csv(&path, symbol.as_deref())?,
        (None, None) => bail!("a CSV file or --synthetic is required"),
    };

    let report = runner.analyze_series(&loaded)?;
    println!("{}", export_json(&report, pretty)?);
    Ok(())
}

fn run_batch(
    files: &[PathBuf],
    config_path: Option<&Path>,
    output_dir: &Path,
    sequential: bool,
) -> Result<()> {
    let config = load_config_or_default(config_path)?;
    let runner = Runner::new(config)?.with_parallelism(!sequential);

    let outcomes = runner.analyze_files(files);
    let summary = write_batch(output_dir, &outcomes)
        .with_context(|| format!("failed to write reports to {}", output_dir.display()))?;

    info!(
        succeeded = summary.succeeded,
        failed = summary.failed.len(),
        "reports saved to {}",
        output_dir.display()
    );

    if !summary.failed.is_empty() {
        for failed in &summary.failed {
            eprintln!("Error for {}: {}", failed.symbol, failed.error);
        }
        std::process::exit(1);
    }

    Ok(())
}

fn run_config(path: Option<&Path>) -> Result<()> {
    let config = load_config_or_default(path)?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}
