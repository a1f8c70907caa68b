use crate::error::PlotError;

// ---------------------------------------------------------------------------
// Dimensions
// ---------------------------------------------------------------------------

/// Edge length of the square image, in pixels.
pub const IMG_EDGE: usize = 28;

/// Number of `f32` values in one image file.
pub const IMG_LEN: usize = IMG_EDGE * IMG_EDGE;

/// Cells strictly above this value print as `**` in the text preview.
pub const PREVIEW_THRESHOLD: f32 = 0.1;

// ---------------------------------------------------------------------------
// ImageGrid – the validated 28×28 image
// ---------------------------------------------------------------------------

/// A 28×28 grid of raw intensity values, stored row-major.
///
/// Every constructor yields exactly [`IMG_LEN`] values. Values are kept
/// exactly as read from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageGrid {
    cells: Vec<f32>,
}

impl ImageGrid {
    /// Reshape a flat buffer into a 28×28 grid: flat index `i` becomes
    /// cell `(i / IMG_EDGE, i % IMG_EDGE)`.
    pub fn from_flat(values: Vec<f32>) -> Result<Self, PlotError> {
        if values.len() != IMG_LEN {
            return Err(PlotError::LengthMismatch {
                values: values.len(),
                trailing_bytes: 0,
            });
        }
        Ok(ImageGrid { cells: values })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> f32) -> Self {
        let cells = (0..IMG_LEN)
            .map(|i| f(i / IMG_EDGE, i % IMG_EDGE))
            .collect();
        ImageGrid { cells }
    }

    /// Value at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= IMG_EDGE || col >= IMG_EDGE {
            return None;
        }
        Some(self.cells[row * IMG_EDGE + col])
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.cells.chunks_exact(IMG_EDGE)
    }

    /// The underlying row-major buffer.
    pub fn as_flat(&self) -> &[f32] {
        &self.cells
    }

    /// Min / max / mean over all cells. NaN cells are skipped.
    pub fn stats(&self) -> ImageStats {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0f64;
        let mut count = 0usize;
        for &v in self.cells.iter().filter(|v| !v.is_nan()) {
            min = min.min(v);
            max = max.max(v);
            sum += v as f64;
            count += 1;
        }
        if count == 0 {
            return ImageStats {
                min: f32::NAN,
                max: f32::NAN,
                mean: f32::NAN,
            };
        }
        ImageStats {
            min,
            max,
            mean: (sum / count as f64) as f32,
        }
    }

    /// Two characters per cell: `**` above `threshold`, blanks otherwise.
    pub fn ascii_preview(&self, threshold: f32) -> String {
        let mut out = String::with_capacity(IMG_LEN * 2 + IMG_EDGE);
        for row in self.rows() {
            for &v in row {
                out.push_str(if v > threshold { "**" } else { "  " });
            }
            out.push('\n');
        }
        out
    }

    /// Human-readable one-liner used in logs and the status line.
    pub fn describe(&self) -> String {
        let s = self.stats();
        format!(
            "{IMG_EDGE}x{IMG_EDGE} image, min {:.4}, max {:.4}, mean {:.4}",
            s.min, s.max, s.mean
        )
    }
}

// ---------------------------------------------------------------------------
// ImageStats
// ---------------------------------------------------------------------------

/// Summary statistics of an [`ImageGrid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}
