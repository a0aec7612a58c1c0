//! Renders the effectiveness-versus-concentration chart from aggregated series.

use anyhow::Result;
use nanotherm_core::analysis::AggregatedSeries;
use plotters::prelude::*;
use std::path::Path;

/// File name of the chart artifact.
pub const CHART_FILE_NAME: &str = "effectiveness_vs_concentration.png";

/// Output raster size: the original 8x5 inch figure at 300 DPI.
const CHART_SIZE: (u32, u32) = (2400, 1500);

/// Renders one line per flow rate, x = concentration percent,
/// y = mean effectiveness, into `effectiveness_vs_concentration.png`
/// under `output_dir`.
pub fn plot_effectiveness_vs_concentration(
    output_dir: &Path,
    series: &[AggregatedSeries],
) -> Result<()> {
    println!("[Plotting] Generating effectiveness chart...");

    if series.is_empty() {
        println!("[Plotting] Warning: No data to plot.");
        return Ok(());
    }

    let path = output_dir.join(CHART_FILE_NAME);
    let root = BitMapBackend::new(&path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let ((x_min, x_max), (y_min, y_max)) = chart_bounds(series);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Effect of Nanoparticle Concentration on Radiator Effectiveness",
            ("sans-serif", 60).into_font(),
        )
        .margin(20)
        .x_label_area_size(90)
        .y_label_area_size(110)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Nanoparticle Concentration (%)")
        .y_desc("Thermal Effectiveness")
        .label_style(("sans-serif", 28).into_font())
        .axis_desc_style(("sans-serif", 36).into_font())
        .draw()?;

    let colors = [RED, GREEN, BLUE, MAGENTA, CYAN, BLACK];

    for (i, s) in series.iter().enumerate() {
        let color = colors[i % colors.len()].clone();

        chart
            .draw_series(LineSeries::new(
                s.points
                    .iter()
                    .map(|p| (p.concentration_percent, p.mean_effectiveness)),
                color.stroke_width(3),
            ))?
            .label(format!("Flow = {} L/min", s.flow_rate_l_min))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], color.filled()));

        chart.draw_series(s.points.iter().map(|p| {
            Circle::new(
                (p.concentration_percent, p.mean_effectiveness),
                6,
                color.filled(),
            )
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 30).into_font())
        .draw()?;
    root.present()?;

    println!("[Plotting] Plot saved as '{}'.", path.display());
    Ok(())
}

/// Axis ranges padded out from the data so markers do not sit on the frame.
fn chart_bounds(series: &[AggregatedSeries]) -> ((f64, f64), (f64, f64)) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for s in series {
        for point in &s.points {
            x_min = x_min.min(point.concentration_percent);
            x_max = x_max.max(point.concentration_percent);
            y_min = y_min.min(point.mean_effectiveness);
            y_max = y_max.max(point.mean_effectiveness);
        }
    }

    (pad_range(x_min, x_max), pad_range(y_min, y_max))
}

/// Widens a min/max pair by 5%, opening a window around single-valued axes
/// so the plot range never collapses to zero width.
fn pad_range(min: f64, max: f64) -> (f64, f64) {
    let span = max - min;
    if span.abs() < f64::EPSILON {
        let pad = if min.abs() < f64::EPSILON {
            1.0
        } else {
            min.abs() * 0.1
        };
        return (min - pad, max + pad);
    }
    let pad = span * 0.05;
    (min - pad, max + pad)
}
