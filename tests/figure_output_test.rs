// tests/figure_output_test.rs

use std::fs;
use std::path::PathBuf;

use noise_vs_exposure::data_input::report_parser::load_report;
use noise_vs_exposure::plot_framework::{format_tick_label, output_path_for, RenderConfig};
use noise_vs_exposure::plot_functions::plot_noise_vs_exposure::plot_noise_vs_exposure;
use plotters::style::IntoFont;

/// Text rendering needs a system sans-serif font; hosts without one skip the render tests.
fn sans_serif_available() -> bool {
    ("sans-serif", 12).into_font().box_size("0").is_ok()
}

#[test]
fn test_output_path_is_input_with_png_extension() {
    let input = PathBuf::from("/afs/data/AR0130_Navitar_10_500_3_16.txt");
    assert_eq!(
        output_path_for(&input),
        PathBuf::from("/afs/data/AR0130_Navitar_10_500_3_16.png")
    );
}

#[test]
fn test_tick_labels_for_signal_and_noise_scales() {
    // Signal axis: up to the 14-bit full range, one notation from 1000 up
    assert_eq!(format_tick_label(500.0), "500");
    assert_eq!(format_tick_label(2000.0), "2.0k");
    assert_eq!(format_tick_label(16000.0), "16.0k");
    // Noise axes: a few DN, often fractional
    assert_eq!(format_tick_label(1.5), "1.5");
    assert_eq!(format_tick_label(0.75), "0.75");
    assert_eq!(format_tick_label(12.0), "12");
}

#[test]
fn test_render_writes_png_beside_input() {
    if !sans_serif_available() {
        eprintln!("skipping: no sans-serif font available");
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("AR0130_Navitar_50_100_1_10.txt");
    fs::write(
        &input,
        "Full Range=16383\nheader\n---\n\
         0.1\t100\t1.2\t1.0\t3.1\t1.4\t1.1\t0.3\t0.2\n\
         1.0\t950\t2.4\t2.0\t6.0\t2.8\t2.1\t0.5\t0.4\n\
         10.0\t9400\t7.9\t6.3\t40.2\t19.0\t14.1\t1.6\t1.3\n",
    )
    .unwrap();

    let report = load_report(&input).unwrap();
    let config = RenderConfig {
        display: false,
        ..RenderConfig::default()
    };
    let output = plot_noise_vs_exposure(&report, &config).unwrap();

    assert_eq!(output, dir.path().join("AR0130_Navitar_50_100_1_10.png"));
    let figure = image::open(&output).unwrap().to_rgba8();
    // Cropped to the drawn content.
    assert!(figure.width() < config.width && figure.height() < config.height);
    // Corners are background and therefore transparent.
    assert_eq!(figure.get_pixel(0, 0)[3], 0);
    // Axes, lines, markers and legend boxes stay opaque.
    let opaque = figure.pixels().filter(|p| p[3] == 255).count();
    assert!(opaque > 1000, "only {opaque} opaque pixels");
}

#[test]
fn test_render_with_nan_cell_succeeds() {
    if !sans_serif_available() {
        eprintln!("skipping: no sans-serif font available");
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("AR0130_Navitar_50_100_1_10.txt");
    fs::write(
        &input,
        "Full Range=16383\nheader\n---\n\
         0.1 100 1 1 1 1 1 1 1\n\
         1 900 2 2 nan 2 2 2 2\n\
         10 9000 3 3 3 3 3 3 3\n",
    )
    .unwrap();

    let report = load_report(&input).unwrap();
    let config = RenderConfig {
        display: false,
        transparent: false,
        tight_bbox: false,
        ..RenderConfig::default()
    };
    let output = plot_noise_vs_exposure(&report, &config).unwrap();
    let figure = image::open(&output).unwrap().to_rgba8();
    assert_eq!(figure.dimensions(), (config.width, config.height));
    assert!(figure.pixels().all(|p| p[3] == 255));
}
