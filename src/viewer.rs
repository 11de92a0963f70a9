// src/viewer.rs

use std::error::Error;
use std::path::Path;

use eframe::egui;
use log::debug;

/// Largest initial window; bigger figures are shrunk to fit.
const MAX_WINDOW_SIZE: [f32; 2] = [1600.0, 900.0];

struct FigureViewer {
    uri: String,
    png_bytes: egui::load::Bytes,
}

impl eframe::App for FigureViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add(
                egui::Image::from_bytes(self.uri.clone(), self.png_bytes.clone()).shrink_to_fit(),
            );
        });
    }
}

/// Shows a saved figure in a native window. Blocks until the window is closed.
pub fn show_figure(png_path: &Path, window_title: &str) -> Result<(), Box<dyn Error>> {
    let png_bytes = std::fs::read(png_path)?;
    let (width, height) = image::image_dimensions(png_path)?;
    let inner_size = [
        (width as f32).min(MAX_WINDOW_SIZE[0]),
        (height as f32).min(MAX_WINDOW_SIZE[1]),
    ];
    debug!("Opening viewer for '{}' at {:?}", png_path.display(), inner_size);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window_title)
            .with_inner_size(inner_size),
        ..Default::default()
    };

    let viewer = FigureViewer {
        uri: format!("bytes://{}", png_path.display()),
        png_bytes: png_bytes.into(),
    };

    eframe::run_native(
        window_title,
        options,
        Box::new(|cc| {
            // Install image loaders so egui can decode the PNG.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(viewer))
        }),
    )?;
    Ok(())
}

// src/viewer.rs
