use std::path::{Path, PathBuf};

use plot_img::data::model::{ImageGrid, IMG_LEN};
use plot_img::error::PlotError;
use plot_img::viewer::Viewer;

/// Writes `values` as native-endian f32 into `dir/name`.
pub fn write_f32_file(dir: &Path, name: &str, values: &[f32]) -> PathBuf {
    let path = dir.join(name);
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();
    std::fs::write(&path, bytes).expect("write test file");
    path
}

/// `0.0, 1.0, …, 783.0`
pub fn sequential_values() -> Vec<f32> {
    (0..IMG_LEN).map(|i| i as f32).collect()
}

/// Records what it was asked to show instead of opening a window.
#[derive(Default)]
pub struct RecordingViewer {
    pub shown: Vec<(PathBuf, ImageGrid)>,
    pub fail_with: Option<String>,
}

impl Viewer for RecordingViewer {
    fn show(&mut self, source: &Path, grid: ImageGrid) -> Result<(), PlotError> {
        self.shown.push((source.to_path_buf(), grid));
        match &self.fail_with {
            Some(msg) => Err(PlotError::Viewer(msg.clone())),
            None => Ok(()),
        }
    }
}
