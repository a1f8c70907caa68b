use std::path::{Path, PathBuf};

use eframe::egui;

use crate::app::PlotImgApp;
use crate::data::model::ImageGrid;
use crate::error::PlotError;

/// Initial window size in points.
const WINDOW_SIZE: [f32; 2] = [900.0, 640.0];
const MIN_WINDOW_SIZE: [f32; 2] = [480.0, 360.0];

/// Something that can display a loaded image and block until dismissed.
pub trait Viewer {
    fn show(&mut self, source: &Path, grid: ImageGrid) -> Result<(), PlotError>;
}

/// Native window backed by eframe. `show` returns when the window closes.
#[derive(Debug, Default)]
pub struct NativeViewer;

impl Viewer for NativeViewer {
    fn show(&mut self, source: &Path, grid: ImageGrid) -> Result<(), PlotError> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(WINDOW_SIZE)
                .with_min_inner_size(MIN_WINDOW_SIZE),
            ..Default::default()
        };

        let title = format!("plot-img – {}", source.display());
        let source: PathBuf = source.to_path_buf();
        log::info!("Opening viewer for {}", source.display());

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(PlotImgApp::new(source, grid)))),
        )
        .map_err(|e| PlotError::Viewer(e.to_string()))
    }
}
