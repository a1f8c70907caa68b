use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};

use crate::color::{render_rgb, Colormap};
use crate::data::model::{ImageGrid, IMG_EDGE};

/// Save the rendered raster (one pixel per cell) as a PNG.
pub fn save_png(path: &Path, grid: &ImageGrid, colormap: Colormap) -> Result<()> {
    let edge = IMG_EDGE as u32;
    let img = RgbImage::from_raw(edge, edge, render_rgb(grid, colormap))
        .context("raster buffer does not match image size")?;
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("saving PNG to {}", path.display()))
}

/// Write the raw values as CSV: one record per image row, no header.
pub fn save_csv(path: &Path, grid: &ImageGrid) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("creating CSV {}", path.display()))?;
    for (r, row) in grid.rows().enumerate() {
        writer
            .write_record(row.iter().map(|v| v.to_string()))
            .with_context(|| format!("writing CSV row {r}"))?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal() -> ImageGrid {
        ImageGrid::from_fn(|r, c| if r == c { 1.0 } else { -0.25 })
    }

    #[test]
    fn png_pixels_follow_colormap() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("digit.png");
        save_png(&path, &diagonal(), Colormap::Gray).unwrap();

        let img = image::open(&path).unwrap().into_rgb8();
        assert_eq!(img.dimensions(), (IMG_EDGE as u32, IMG_EDGE as u32));
        assert_eq!(img.get_pixel(5, 5).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(4, 5).0, [0, 0, 0]);
    }

    #[test]
    fn png_is_written_without_an_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("digit");
        save_png(&path, &diagonal(), Colormap::Gray).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let img = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .unwrap()
            .into_rgb8();
        assert_eq!(img.dimensions(), (IMG_EDGE as u32, IMG_EDGE as u32));
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn csv_has_one_record_per_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("digit.csv");
        let grid = ImageGrid::from_fn(|r, c| r as f32 + c as f32 / 100.0);
        save_csv(&path, &grid).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .unwrap();
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), IMG_EDGE);
        for (r, record) in records.iter().enumerate() {
            assert_eq!(record.len(), IMG_EDGE);
            for (c, field) in record.iter().enumerate() {
                let v: f32 = field.parse().unwrap();
                assert_eq!(Some(v), grid.get(r, c));
            }
        }
    }
}
