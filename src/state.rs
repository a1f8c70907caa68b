use std::path::{Path, PathBuf};

use eframe::egui::TextureHandle;

use crate::color::Colormap;
use crate::data::loader;
use crate::data::model::{ImageGrid, ImageStats, PREVIEW_THRESHOLD};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The cell currently under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoveredPixel {
    pub row: usize,
    pub col: usize,
    pub value: f32,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// File the current image was read from.
    pub source: PathBuf,

    /// The image being shown.
    pub grid: ImageGrid,

    /// Cached statistics of `grid`.
    pub stats: ImageStats,

    /// Cached text preview of `grid`.
    pub preview: String,

    /// Active colour map.
    pub colormap: Colormap,

    /// Uploaded raster; `None` whenever it must be rebuilt.
    pub texture: Option<TextureHandle>,

    /// Pixel read-out under the pointer (refreshed every frame).
    pub hovered: Option<HoveredPixel>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(source: PathBuf, grid: ImageGrid) -> Self {
        let stats = grid.stats();
        let preview = grid.ascii_preview(PREVIEW_THRESHOLD);
        Self {
            source,
            grid,
            stats,
            preview,
            colormap: Colormap::default(),
            texture: None,
            hovered: None,
            status_message: None,
        }
    }

    /// Replace the shown image, keeping the colour map.
    pub fn set_image(&mut self, source: PathBuf, grid: ImageGrid) {
        let colormap = self.colormap;
        *self = AppState::new(source, grid);
        self.colormap = colormap;
    }

    /// Load another raw image file. On failure the current image stays and
    /// the error lands in the status line.
    pub fn open_path(&mut self, path: &Path) {
        match loader::load_image(path) {
            Ok(grid) => {
                log::info!("Loaded {}: {}", path.display(), grid.describe());
                self.set_image(path.to_path_buf(), grid);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("{}: {e}", path.display()));
            }
        }
    }

    /// Switch colour map; the texture is rebuilt on the next frame.
    pub fn set_colormap(&mut self, colormap: Colormap) {
        if self.colormap != colormap {
            self.colormap = colormap;
            self.texture = None;
        }
    }

    /// Update the read-out for the cell at `(row, col)`, if any.
    pub fn hover(&mut self, cell: Option<(usize, usize)>) {
        self.hovered = cell.and_then(|(row, col)| {
            self.grid
                .get(row, col)
                .map(|value| HoveredPixel { row, col, value })
        });
    }
}
