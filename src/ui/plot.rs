use eframe::egui::{self, TextureOptions, Ui};
use egui_plot::{Plot, PlotImage, PlotPoint};

use crate::color::to_color_image;
use crate::data::model::IMG_EDGE;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Image plot (central panel)
// ---------------------------------------------------------------------------

const EDGE: f64 = IMG_EDGE as f64;

/// Render the image in the central panel and track the hovered cell.
///
/// The image spans `x ∈ [0, 28]`, `y ∈ [-28, 0]` so that row 0 sits at the
/// top; the y-axis labels are negated to read as row numbers.
pub fn image_plot(ui: &mut Ui, state: &mut AppState) {
    let colormap = state.colormap;
    let texture_id = state
        .texture
        .get_or_insert_with(|| {
            ui.ctx().load_texture(
                "raw_image",
                to_color_image(&state.grid, colormap),
                TextureOptions::NEAREST,
            )
        })
        .id();

    let response = Plot::new("image_plot")
        .data_aspect(1.0)
        .x_axis_label("col")
        .y_axis_label("row")
        .y_axis_formatter(|mark, _range| format!("{}", 0.0 - mark.value))
        .show_grid(false)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.image(PlotImage::new(
                texture_id,
                PlotPoint::new(EDGE / 2.0, -EDGE / 2.0),
                egui::vec2(IMG_EDGE as f32, IMG_EDGE as f32),
            ));
            plot_ui.pointer_coordinate()
        });

    let cell = response
        .inner
        .filter(|_| response.response.hovered())
        .and_then(|p| cell_at(p.x, p.y));
    state.hover(cell);
}

/// The `(row, col)` under plot coordinate `(x, y)`, if inside the image.
pub fn cell_at(x: f64, y: f64) -> Option<(usize, usize)> {
    let row = -y;
    if !(0.0..EDGE).contains(&x) || !(0.0..EDGE).contains(&row) {
        return None;
    }
    Some((row.floor() as usize, x.floor() as usize))
}
