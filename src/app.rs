use std::path::PathBuf;

use eframe::egui;

use crate::data::model::ImageGrid;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PlotImgApp {
    pub state: AppState,
}

impl PlotImgApp {
    pub fn new(source: PathBuf, grid: ImageGrid) -> Self {
        Self {
            state: AppState::new(source, grid),
        }
    }
}

impl eframe::App for PlotImgApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: statistics and preview ----
        egui::SidePanel::left("info_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: image ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::image_plot(ui, &mut self.state);
        });
    }
}
