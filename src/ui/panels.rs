use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::Colormap;
use crate::export;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – statistics, read-out, preview
// ---------------------------------------------------------------------------

/// Render the left info panel.
pub fn side_panel(ui: &mut Ui, state: &AppState) {
    ui.heading("Image");
    ui.separator();

    ui.label(RichText::new(state.source.display().to_string()).monospace());
    ui.add_space(4.0);

    egui::Grid::new("stats_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            ui.label("min");
            ui.label(format!("{:.6}", state.stats.min));
            ui.end_row();
            ui.label("max");
            ui.label(format!("{:.6}", state.stats.max));
            ui.end_row();
            ui.label("mean");
            ui.label(format!("{:.6}", state.stats.mean));
            ui.end_row();
        });

    ui.separator();
    match state.hovered {
        Some(px) => ui.label(format!("row {}, col {}: {}", px.row, px.col, px.value)),
        None => ui.label("Hover the image to read values."),
    };
    ui.separator();

    egui::CollapsingHeader::new(RichText::new("Text preview").strong())
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ScrollArea::both()
                .auto_shrink([false, true])
                .show(ui, |ui: &mut Ui| {
                    ui.label(RichText::new(&state.preview).monospace().size(9.0));
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Save PNG…").clicked() {
                save_png_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export CSV…").clicked() {
                export_csv_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let mut selected = state.colormap;
        egui::ComboBox::from_id_salt("colormap")
            .selected_text(selected.label())
            .show_ui(ui, |ui: &mut Ui| {
                for cm in Colormap::ALL {
                    ui.selectable_value(&mut selected, cm, cm.label());
                }
            });
        state.set_colormap(selected);

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open raw image")
        .add_filter("Raw float32", &["bin", "raw", "img"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path);
    }
}

fn save_png_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save image as PNG")
        .set_file_name(format!("{}.png", file_stem(state)))
        .add_filter("PNG", &["png"])
        .save_file();

    if let Some(path) = file {
        let result = export::save_png(&path, &state.grid, state.colormap);
        report(state, result, &format!("Saved {}", path.display()));
    }
}

fn export_csv_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export values as CSV")
        .set_file_name(format!("{}.csv", file_stem(state)))
        .add_filter("CSV", &["csv"])
        .save_file();

    if let Some(path) = file {
        let result = export::save_csv(&path, &state.grid);
        report(state, result, &format!("Exported {}", path.display()));
    }
}

fn file_stem(state: &AppState) -> String {
    state
        .source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string())
}

fn report(state: &mut AppState, result: anyhow::Result<()>, done: &str) {
    match result {
        Ok(()) => {
            log::info!("{done}");
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Export failed: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
