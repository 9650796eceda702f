//! propkit walkthrough
//!
//! Builds a `SampleObject`, lists its parameters and drives them through the
//! generic name-keyed interface: a valid write, a write rejected by a
//! validator, a write rejected for its type, and a typed reset.
//!
//! Usage:
//!   propkit --format json

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use propkit_cli::run_scenario;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "propkit")]
#[command(about = "Walk through the propkit parameter model")]
struct Args {
    /// Output format for the report
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    info!("propkit walkthrough starting...");
    let report = run_scenario().context("failed to build sample object")?;
    debug!(steps = report.steps.len(), "Walkthrough finished");

    match args.format {
        Format::Text => print!("{report}"),
        Format::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("failed to serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}
