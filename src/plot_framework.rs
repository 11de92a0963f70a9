// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, PathElement, Text};
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use image::{ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use log::{debug, info};

use std::error::Error;
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::constants::{
    COLOR_LEGEND_BACKGROUND, LINE_WIDTH_LEGEND, MARKER_SIZE, PLOT_HEIGHT, PLOT_WIDTH,
    REFERENCE_LINE_DASH_SEGMENTS, TIGHT_BBOX_PAD_PX,
};
use crate::font_config::{
    FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND, FONT_TUPLE_MAIN_TITLE,
    FONT_TUPLE_MESSAGE,
};

/// Panel names, left to right.
pub const PANEL_NAMES: [&str; 3] = ["Signal", "FPN", "Dyn"];

/// Canvas colour; also the colour keyed out for transparent output.
const BACKGROUND: RGBColor = WHITE;

/// Output settings for a rendered figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Background pixels are written with alpha 0.
    pub transparent: bool,
    /// Crop the canvas to the drawn content plus `TIGHT_BBOX_PAD_PX`.
    pub tight_bbox: bool,
    /// Show the saved figure in a window afterwards.
    pub display: bool,
    /// Write the joined figure title above the panels. Each panel already
    /// carries its share of it as a caption.
    pub draw_title: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: PLOT_WIDTH,
            height: PLOT_HEIGHT,
            transparent: true,
            tight_bbox: true,
            display: true,
            draw_title: false,
        }
    }
}

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}

/// Tick label text: k/M notation for large values, extra decimals for small ones.
pub fn format_tick_label(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if magnitude >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else if magnitude >= 10.0 || value.fract() == 0.0 {
        format!("{:.0}", value)
    } else if magnitude >= 1.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// PNG path for a measurement file: same directory and base name, `.png` extension.
pub fn output_path_for(input_path: &Path) -> PathBuf {
    input_path.with_extension("png")
}

/// Splits a series at non-finite points; each run is drawn as its own line.
pub fn finite_runs(data: &[(f64, f64)]) -> Vec<Vec<(f64, f64)>> {
    let mut runs: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for &(x, y) in data {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// A data series drawn as connected markers.
/// Non-finite points are left out and break the line.
#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

/// Dashed horizontal line spanning the whole x range.
#[derive(Clone)]
pub struct ReferenceLine {
    pub y: f64,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub reference_lines: Vec<ReferenceLine>,
    pub x_label: String,
    pub y_label: String,
}

/// Draw a "Data Unavailable" message on a plot area.
fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    panel_name: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    let (width, height) = area.dim_in_pixel();
    let text_style = FONT_TUPLE_MESSAGE.into_font().color(&RED);
    area.draw(&Text::new(
        format!("{panel_name} Data Unavailable: {reason}"),
        (width as i32 / 2 - 150, height as i32 / 2 - 20),
        text_style,
    ))?;
    Ok(())
}

/// Splits `[start, end]` into the dash segments of a dashed line at height `y`.
fn dash_segments(start: f64, end: f64, y: f64) -> Vec<Vec<(f64, f64)>> {
    let segment_length = (end - start) / (REFERENCE_LINE_DASH_SEGMENTS as f64 * 2.0); // Half for dash, half for gap
    (0..REFERENCE_LINE_DASH_SEGMENTS)
        .map(|i| {
            let x_start = start + (i as f64 * 2.0) * segment_length;
            vec![(x_start, y), (x_start + segment_length, y)]
        })
        .collect()
}

/// Draws one panel: mesh, reference lines, marker series and legend.
fn draw_panel_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_config: &PlotConfig,
) -> Result<(), Box<dyn Error>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(8)
        .y_labels(10)
        .x_label_formatter(&|x| format_tick_label(*x))
        .y_label_formatter(&|y| format_tick_label(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let mut legend_series_count = 0;

    for s in &plot_config.series {
        let runs = finite_runs(&s.data);
        if runs.is_empty() {
            continue;
        }
        let series = chart.draw_series(
            runs.iter()
                .map(|run| PathElement::new(run.clone(), s.color.stroke_width(s.stroke_width))),
        )?;
        if !s.label.is_empty() {
            series.label(&s.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 20, y)],
                    s.color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
            legend_series_count += 1;
        }
        chart.draw_series(
            runs.iter()
                .flatten()
                .map(|&point| Circle::new(point, MARKER_SIZE, s.color.filled())),
        )?;
    }

    for line in &plot_config.reference_lines {
        let segments = dash_segments(plot_config.x_range.start, plot_config.x_range.end, line.y);
        let series = chart.draw_series(
            segments
                .into_iter()
                .map(|segment| PathElement::new(segment, line.color.stroke_width(line.stroke_width))),
        )?;
        if !line.label.is_empty() {
            series.label(&line.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 8, y)],
                    line.color.stroke_width(LINE_WIDTH_LEGEND),
                )
            });
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(COLOR_LEGEND_BACKGROUND)
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }

    Ok(())
}

/// Draws the panels side by side on one canvas and returns the raw RGB image.
pub fn render_side_by_side<F>(
    figure_title: &str,
    config: &RenderConfig,
    mut get_panel_plot_data: F,
) -> Result<RgbImage, Box<dyn Error>>
where
    F: FnMut(usize) -> Option<PlotConfig>,
{
    let mut buffer = vec![0u8; config.width as usize * config.height as usize * 3];
    {
        let root_area =
            BitMapBackend::with_buffer(&mut buffer, (config.width, config.height)).into_drawing_area();
        root_area.fill(&BACKGROUND)?;
        let top_margin = if config.draw_title {
            root_area.draw(&Text::new(
                figure_title,
                (10, 10),
                FONT_TUPLE_MAIN_TITLE.into_font().color(&BLACK),
            ))?;
            50
        } else {
            5
        };
        let margined_root_area = root_area.margin(top_margin, 5, 5, 5);
        let sub_plot_areas = margined_root_area.split_evenly((1, PANEL_NAMES.len()));

        for (panel_index, area) in sub_plot_areas.iter().enumerate() {
            match get_panel_plot_data(panel_index) {
                Some(plot_config) => {
                    let has_data = plot_config
                        .series
                        .iter()
                        .any(|s| !finite_runs(&s.data).is_empty());
                    let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
                        && plot_config.y_range.end > plot_config.y_range.start;
                    if has_data && valid_ranges {
                        draw_panel_chart(area, &plot_config)?;
                    } else {
                        let reason = if !has_data {
                            "No data points"
                        } else {
                            "Invalid ranges"
                        };
                        draw_unavailable_message(area, PANEL_NAMES[panel_index], reason)?;
                    }
                }
                None => {
                    draw_unavailable_message(
                        area,
                        PANEL_NAMES[panel_index],
                        "No finite values in its columns",
                    )?;
                }
            }
        }
        root_area.present()?;
    } // Drawing area releases the buffer here

    RgbImage::from_raw(config.width, config.height, buffer)
        .ok_or_else(|| "render buffer does not match the canvas size".into())
}

/// Draws the panels, applies the background/crop settings and writes the PNG.
pub fn draw_side_by_side_plot<F>(
    output_path: &Path,
    figure_title: &str,
    config: &RenderConfig,
    get_panel_plot_data: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnMut(usize) -> Option<PlotConfig>,
{
    let canvas = render_side_by_side(figure_title, config, get_panel_plot_data)?;
    let figure = finish_figure(&canvas, config.transparent, config.tight_bbox);
    debug!(
        "Canvas {}x{}, saved figure {}x{}",
        canvas.width(),
        canvas.height(),
        figure.width(),
        figure.height()
    );
    figure.save_with_format(output_path, ImageFormat::Png)?;
    info!("Figure saved as '{}'.", output_path.display());
    Ok(())
}

fn background_pixel() -> Rgb<u8> {
    Rgb([BACKGROUND.0, BACKGROUND.1, BACKGROUND.2])
}

/// Converts the rendered canvas to RGBA, keying out the background when
/// `transparent` is set and cropping to the content when `tight_bbox` is set.
pub fn finish_figure(canvas: &RgbImage, transparent: bool, tight_bbox: bool) -> RgbaImage {
    let background = background_pixel();
    let rgba = RgbaImage::from_fn(canvas.width(), canvas.height(), |x, y| {
        let pixel = canvas.get_pixel(x, y);
        let alpha = if transparent && *pixel == background { 0 } else { 255 };
        Rgba([pixel[0], pixel[1], pixel[2], alpha])
    });

    if !tight_bbox {
        return rgba;
    }
    match content_bounds(canvas, background, TIGHT_BBOX_PAD_PX) {
        Some((x, y, width, height)) => image::imageops::crop_imm(&rgba, x, y, width, height).to_image(),
        None => rgba,
    }
}

/// Bounding box `(x, y, width, height)` of all non-background pixels, grown
/// by `pad` and clamped to the image. `None` when the image is blank.
pub fn content_bounds(image: &RgbImage, background: Rgb<u8>, pad: u32) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None; // min_x, min_y, max_x, max_y
    for (x, y, pixel) in image.enumerate_pixels() {
        if *pixel == background {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((min_x, min_y, max_x, max_y)) => (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y)),
        });
    }

    let (min_x, min_y, max_x, max_y) = bounds?;
    let x0 = min_x.saturating_sub(pad);
    let y0 = min_y.saturating_sub(pad);
    let x1 = max_x.saturating_add(pad).min(image.width() - 1);
    let y1 = max_y.saturating_add(pad).min(image.height() - 1);
    Some((x0, y0, x1 - x0 + 1, y1 - y0 + 1))
}


// src/plot_framework.rs
