use std::cmp::Ordering;
use std::fs;

use anyhow::{Context, Result};
use chrono::Utc;
use log::debug;
use nanotherm_core::{
    analysis::{self, AggregatedSeries},
    dataset,
    export::AggregateWriter,
};
use serde::Serialize;

use crate::config::RunConfig;
use crate::plotting;

/// File name of the aggregate CSV artifact.
pub const AGGREGATE_FILE_NAME: &str = "aggregated_effectiveness.csv";

/// File name of the run summary artifact.
pub const SUMMARY_FILE_NAME: &str = "effectiveness_summary.json";

#[derive(Debug, Serialize)]
struct RunSummary<'a> {
    generated_at: String,
    dataset: String,
    ambient_temp_c: f64,
    observations: usize,
    series: &'a [AggregatedSeries],
}

/// Runs the full analysis: load, aggregate, render, export, report.
pub fn run(config: &RunConfig) -> Result<()> {
    println!("--- [Workflow] Analyzing '{}' ---", config.dataset.display());

    let observations = dataset::load_observations(&config.dataset)?;
    let series = analysis::aggregate_effectiveness(&observations, config.ambient_temp_c)?;
    debug!("Aggregated {} flow-rate series", series.len());

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            config.output_dir.display()
        )
    })?;

    plotting::plot_effectiveness_vs_concentration(&config.output_dir, &series)?;

    let aggregate_path = config.output_dir.join(AGGREGATE_FILE_NAME);
    let mut writer = AggregateWriter::new(&aggregate_path)
        .with_context(|| format!("Failed to create '{}'", aggregate_path.display()))?;
    writer.write_series(&series)?;

    let summary = RunSummary {
        generated_at: Utc::now().to_rfc3339(),
        dataset: config.dataset.display().to_string(),
        ambient_temp_c: config.ambient_temp_c,
        observations: observations.len(),
        series: &series,
    };
    let summary_path = config.output_dir.join(SUMMARY_FILE_NAME);
    fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)
        .with_context(|| format!("Failed to write '{}'", summary_path.display()))?;

    print_summary_report(config, observations.len(), &series);

    println!(
        "\nAnalysis complete. Results are in '{}'",
        config.output_dir.display()
    );
    Ok(())
}

fn print_summary_report(config: &RunConfig, observations: usize, series: &[AggregatedSeries]) {
    println!("\n--- [Final Summary Report] ---");
    println!("========================================");
    println!(
        "Dataset: {} ({} observations)",
        config.dataset.display(),
        observations
    );
    println!("Ambient reference: {} °C", config.ambient_temp_c);
    println!("----------------------------------------");

    for s in series {
        let best = s.points.iter().max_by(|a, b| {
            a.mean_effectiveness
                .partial_cmp(&b.mean_effectiveness)
                .unwrap_or(Ordering::Equal)
        });
        if let Some(best) = best {
            println!(
                "  - Flow = {:<4} L/min | {:>2} concentrations | peak effectiveness {:.4} at {}%",
                s.flow_rate_l_min,
                s.points.len(),
                best.mean_effectiveness,
                best.concentration_percent
            );
        }
    }
    println!("========================================");
}
