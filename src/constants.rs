// src/constants.rs

use plotters::style::colors::full_palette::{
    AMBER, BLUE, DEEPORANGE, GREEN, GREY_700, INDIGO, PURPLE, RED, TEAL,
};
use plotters::style::RGBColor;

// Plot dimensions (16:9, wide enough for three panels side by side).
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1080;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 24;
pub const FONT_SIZE_CHART_TITLE: i32 = 20;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 20;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;
pub const LINE_WIDTH_REFERENCE: u32 = 2;

// Radius of the sample markers drawn on every data point.
pub const MARKER_SIZE: i32 = 4;

// Dash pattern of the full-range reference line, in data-independent segments.
pub const REFERENCE_LINE_DASH_SEGMENTS: usize = 40;

// Padding (px) kept around the drawn content when cropping to a tight bounding box.
pub const TIGHT_BBOX_PAD_PX: u32 = 10;

// --- Plot Color Assignments ---
pub const COLOR_SIGNAL: &RGBColor = &BLUE;
pub const COLOR_FULL_RANGE: &RGBColor = &GREY_700;
// Off-white so the legend box is not keyed out with the white canvas.
pub const COLOR_LEGEND_BACKGROUND: RGBColor = RGBColor(254, 254, 254);

// One colour per noise column, indexed by column position (0..9).
// Exposure (0) and signal (1) are never drawn with this table.
pub const COLOR_NOISE_COLUMNS: [&RGBColor; 9] = [
    &GREY_700, &BLUE, &GREEN, &AMBER, &RED, &PURPLE, &TEAL, &DEEPORANGE, &INDIGO,
];

// src/constants.rs
