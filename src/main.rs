//! Thin driver for the Allocation Reporting Engine.
//!
//! Resolves file paths and process exit behavior; everything else lives in
//! the library. Reads a Teamwork time export, runs the report pipeline, and
//! writes the styled workbook (or prints JSON with `--json`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use allocation_engine::calculation::generate_report;
use allocation_engine::config::ReportConfig;
use allocation_engine::error::EngineResult;
use allocation_engine::xlsx::{read_time_report, write_report};

#[derive(Parser)]
#[command(name = "allocation-engine")]
#[command(author, version, about = "Allocation and FTE reporting for Teamwork time exports", long_about = None)]
struct Cli {
    /// Input workbook path (.xls or .xlsx)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output workbook path
    #[arg(short, long, default_value = "Allocation Report.xlsx")]
    output: PathBuf,

    /// Optional YAML file overriding sheet and column names
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the report as JSON to stdout instead of writing a workbook
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> EngineResult<()> {
    let config = match &cli.config {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };

    info!(input = %cli.input.display(), "Reading time export");
    let records = read_time_report(&cli.input, &config)?;

    let report = generate_report(records)?;

    if cli.json {
        // Models serialize decimals as strings, so the JSON is exact.
        let json = serde_json::to_string_pretty(&report).map_err(|e| {
            allocation_engine::error::EngineError::WorkbookWrite {
                path: "stdout".to_string(),
                message: e.to_string(),
            }
        })?;
        println!("{json}");
    } else {
        write_report(&cli.output, &report, &config)?;
        println!("Report written to {}", cli.output.display());
    }

    Ok(())
}
