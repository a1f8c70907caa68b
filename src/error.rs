use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop `plot-img` from showing an image.
///
/// The `Display` text of the first three variants is the exact line printed
/// to the user.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Usage: ./plot_img.py <image_file>")]
    Usage,

    #[error("Error: invalid path given:  {0}")]
    InvalidPath(String),

    /// Decoded element count differs from `IMG_LEN`.
    #[error("Unknown img file len")]
    LengthMismatch { values: usize, trailing_bytes: usize },

    #[error("Error: failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error: could not open viewer: {0}")]
    Viewer(String),
}

impl PlotError {
    /// Process exit code for this failure. Success is 0.
    pub fn exit_code(&self) -> u8 {
        match self {
            PlotError::Usage => 1,
            PlotError::InvalidPath(_) => 2,
            PlotError::LengthMismatch { .. } => 3,
            PlotError::Read { .. } => 4,
            PlotError::Viewer(_) => 5,
        }
    }
}
