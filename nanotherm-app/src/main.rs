use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::RunConfig;

mod config;
mod plotting;
mod workflow;

/// Plot nanofluid radiator thermal effectiveness against nanoparticle
/// concentration, one line per coolant flow rate.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Experimental results CSV to analyze
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Optional YAML run configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory receiving the chart and aggregate artifacts
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Ambient reference temperature in °C
    #[arg(long, value_name = "TEMP")]
    ambient: Option<f64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let base = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    let config = base.with_overrides(args.data, args.output_dir, args.ambient);

    if !config.dataset.exists() {
        println!(
            "Data file not found at {}. Please adjust the path.",
            config.dataset.display()
        );
        return Ok(());
    }

    workflow::run(&config)
}
