// src/plot_functions/plot_noise_vs_exposure.rs

use std::error::Error;
use std::path::PathBuf;

use ndarray_stats::QuantileExt;
use plotters::style::RGBColor;

use crate::column_names::{
    column_label, legend_label, COL_EXPOSURE, COL_SIGNAL, DYN_COLUMNS, FPN_COLUMNS,
};
use crate::constants::{
    COLOR_FULL_RANGE, COLOR_NOISE_COLUMNS, COLOR_SIGNAL, LINE_WIDTH_PLOT, LINE_WIDTH_REFERENCE,
};
use crate::data_input::report::ParsedReport;
use crate::plot_framework::{
    calculate_range, draw_side_by_side_plot, output_path_for, PlotConfig, PlotSeries,
    ReferenceLine, RenderConfig,
};

/// Min and max over the finite values of the given columns.
///
/// Columns without a single finite value are skipped; `None` when none of them has one.
fn column_bounds(report: &ParsedReport, columns: &[usize]) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for &index in columns {
        // Infinities are treated like NaN so the skip-NaN reductions ignore them.
        let finite = report
            .column(index)
            .mapv(|v| if v.is_finite() { v } else { f64::NAN });
        let (min, max) = (*finite.min_skipnan(), *finite.max_skipnan());
        if min.is_nan() || max.is_nan() {
            continue;
        }
        bounds = Some(match bounds {
            None => (min, max),
            Some((lo, hi)) => (lo.min(min), hi.max(max)),
        });
    }
    bounds
}

fn exposure_range(report: &ParsedReport) -> Option<std::ops::Range<f64>> {
    let (lo, hi) = column_bounds(report, &[COL_EXPOSURE])?;
    let (x_min, x_max) = calculate_range(lo, hi);
    Some(x_min..x_max)
}

/// Panel 1: signal against exposure, with the full-range line as saturation reference.
pub fn signal_panel(report: &ParsedReport) -> Option<PlotConfig> {
    let x_range = exposure_range(report)?;
    let (lo, hi) = column_bounds(report, &[COL_SIGNAL])?;
    let full_range = report.full_range() as f64;
    let (y_min, y_max) = calculate_range(lo.min(full_range), hi.max(full_range));

    Some(PlotConfig {
        title: report.metadata().signal_title(),
        x_range,
        y_range: y_min..y_max,
        series: vec![PlotSeries {
            data: report.series(COL_SIGNAL),
            label: legend_label(COL_SIGNAL),
            color: *COLOR_SIGNAL,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        reference_lines: vec![ReferenceLine {
            y: full_range,
            label: "Full range".to_string(),
            color: *COLOR_FULL_RANGE,
            stroke_width: LINE_WIDTH_REFERENCE,
        }],
        x_label: column_label(COL_EXPOSURE).to_string(),
        y_label: column_label(COL_SIGNAL).to_string(),
    })
}

fn noise_panel(
    report: &ParsedReport,
    title: String,
    y_label: &str,
    columns: &[usize],
) -> Option<PlotConfig> {
    let x_range = exposure_range(report)?;
    let (lo, hi) = column_bounds(report, columns)?;
    let (y_min, y_max) = calculate_range(lo, hi);

    let series = columns
        .iter()
        .map(|&index| {
            let color: RGBColor = *COLOR_NOISE_COLUMNS[index];
            PlotSeries {
                data: report.series(index),
                label: legend_label(index),
                color,
                stroke_width: LINE_WIDTH_PLOT,
            }
        })
        .collect();

    Some(PlotConfig {
        title,
        x_range,
        y_range: y_min..y_max,
        series,
        reference_lines: Vec::new(),
        x_label: column_label(COL_EXPOSURE).to_string(),
        y_label: y_label.to_string(),
    })
}

/// Panel 2: fixed pattern noise (overall, columnwise, rowwise).
pub fn fpn_panel(report: &ParsedReport) -> Option<PlotConfig> {
    noise_panel(report, report.metadata().fpn_title(), "FPN", &FPN_COLUMNS)
}

/// Panel 3: temporal noise (RMS, average, columnwise, rowwise).
pub fn dyn_panel(report: &ParsedReport) -> Option<PlotConfig> {
    noise_panel(report, report.metadata().dyn_title(), "Dyn", &DYN_COLUMNS)
}

/// Renders the three-panel Noise vs. Exposure figure next to the source file.
///
/// Returns the path of the written PNG.
pub fn plot_noise_vs_exposure(
    report: &ParsedReport,
    config: &RenderConfig,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_file = output_path_for(report.source_path());
    let figure_title = report.metadata().figure_title();

    draw_side_by_side_plot(&output_file, &figure_title, config, |panel_index| {
        match panel_index {
            0 => signal_panel(report),
            1 => fpn_panel(report),
            2 => dyn_panel(report),
            _ => None,
        }
    })?;

    Ok(output_file)
}


// src/plot_functions/plot_noise_vs_exposure.rs
