use std::fs;
use std::path::Path;

use crate::error::PlotError;

use super::model::{ImageGrid, IMG_LEN};

const F32_SIZE: usize = std::mem::size_of::<f32>();

// ---------------------------------------------------------------------------
// Decoded file contents
// ---------------------------------------------------------------------------

/// The `f32` values decoded from a raw file, before any shape check.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBuffer {
    pub values: Vec<f32>,
    /// Bytes at the end of the file that do not form a whole `f32`.
    pub trailing_bytes: usize,
}

impl RawBuffer {
    /// Whether the buffer holds exactly one 28×28 image.
    pub fn has_image_len(&self) -> bool {
        self.values.len() == IMG_LEN && self.trailing_bytes == 0
    }

    /// Reshape into an [`ImageGrid`], failing on any length mismatch.
    pub fn into_grid(self) -> Result<ImageGrid, PlotError> {
        if !self.has_image_len() {
            return Err(PlotError::LengthMismatch {
                values: self.values.len(),
                trailing_bytes: self.trailing_bytes,
            });
        }
        ImageGrid::from_flat(self.values)
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Decode native-endian `f32` values from raw bytes. A partial value at the
/// end is counted in `trailing_bytes` and otherwise ignored.
pub fn decode_f32_ne(bytes: &[u8]) -> RawBuffer {
    let chunks = bytes.chunks_exact(F32_SIZE);
    let trailing_bytes = chunks.remainder().len();
    let values = chunks
        .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    RawBuffer {
        values,
        trailing_bytes,
    }
}

/// Read a whole file and decode it as native-endian `f32` values.
pub fn read_raw(path: &Path) -> Result<RawBuffer, PlotError> {
    let bytes = fs::read(path).map_err(|source| PlotError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = decode_f32_ne(&bytes);
    log::debug!(
        "Read {} bytes from {} ({} values, {} trailing bytes)",
        bytes.len(),
        path.display(),
        raw.values.len(),
        raw.trailing_bytes
    );
    Ok(raw)
}

/// Read a raw image file and reshape it into a 28×28 grid.
pub fn load_image(path: &Path) -> Result<ImageGrid, PlotError> {
    read_raw(path)?.into_grid()
}

/// Write a grid row-major as native-endian `f32` values, no header.
pub fn write_raw(path: &Path, grid: &ImageGrid) -> std::io::Result<()> {
    fs::write(path, encode_f32_ne(grid.as_flat()))
}

/// Encode values as native-endian bytes.
pub fn encode_f32_ne(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::IMG_EDGE;

    #[test]
    fn decodes_native_endian_values() {
        let values = [0.0f32, -1.5, 3.25, f32::MAX];
        let raw = decode_f32_ne(&encode_f32_ne(&values));
        assert_eq!(raw.values, values);
        assert_eq!(raw.trailing_bytes, 0);
    }

    #[test]
    fn partial_value_is_counted_as_trailing() {
        let mut bytes = encode_f32_ne(&[1.0, 2.0]);
        bytes.extend_from_slice(&[0xAB, 0xCD, 0xEF]);
        let raw = decode_f32_ne(&bytes);
        assert_eq!(raw.values, vec![1.0, 2.0]);
        assert_eq!(raw.trailing_bytes, 3);
    }

    #[test]
    fn exact_length_plus_trailing_bytes_is_a_mismatch() {
        let mut bytes = encode_f32_ne(&vec![0.5; IMG_LEN]);
        bytes.push(0);
        let raw = decode_f32_ne(&bytes);
        assert_eq!(raw.values.len(), IMG_LEN);
        assert!(!raw.has_image_len());
        assert!(matches!(
            raw.into_grid(),
            Err(PlotError::LengthMismatch {
                values: IMG_LEN,
                trailing_bytes: 1
            })
        ));
    }

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.bin");
        let grid = ImageGrid::from_fn(|r, c| (r as f32) * 0.1 - (c as f32) / 3.0);
        write_raw(&path, &grid).unwrap();

        assert_eq!(fs::metadata(&path).unwrap().len() as usize, IMG_LEN * 4);
        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded, grid);
        assert_eq!(loaded.get(IMG_EDGE - 1, 3), grid.get(IMG_EDGE - 1, 3));
    }

    #[test]
    fn directory_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_image(dir.path()),
            Err(PlotError::Read { .. })
        ));
    }
}
