use eframe::egui::{Color32, ColorImage};
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{ImageGrid, IMG_EDGE};

// ---------------------------------------------------------------------------
// Intensity scaling
// ---------------------------------------------------------------------------

/// Linear map from the grid's value range onto `[0, 1]`.
///
/// Display-only: the grid's stored values never change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    pub min: f32,
    pub max: f32,
}

impl Scaling {
    /// Span the finite min..max of `grid`. Infinite and NaN cells do not
    /// widen the range.
    pub fn of(grid: &ImageGrid) -> Self {
        let (min, max) = grid
            .as_flat()
            .iter()
            .filter(|v| v.is_finite())
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if min > max {
            return Scaling {
                min: f32::NAN,
                max: f32::NAN,
            };
        }
        Scaling { min, max }
    }

    /// Position of `value` within the range. Infinite cells clamp to the
    /// ends; constant images and NaN map to 0.
    pub fn normalize(&self, value: f32) -> f32 {
        // f64 keeps max - min finite for any pair of finite f32s.
        let range = self.max as f64 - self.min as f64;
        if !range.is_finite() || range <= 0.0 || value.is_nan() {
            return 0.0;
        }
        ((value as f64 - self.min as f64) / range).clamp(0.0, 1.0) as f32
    }
}

// ---------------------------------------------------------------------------
// Colormaps
// ---------------------------------------------------------------------------

/// How normalized intensities turn into colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Colormap {
    #[default]
    Gray,
    InvertedGray,
    Heat,
}

impl Colormap {
    pub const ALL: [Colormap; 3] = [Colormap::Gray, Colormap::InvertedGray, Colormap::Heat];

    pub fn label(self) -> &'static str {
        match self {
            Colormap::Gray => "Gray",
            Colormap::InvertedGray => "Inverted gray",
            Colormap::Heat => "Heat",
        }
    }

    /// Colour for a normalized intensity `t` in `[0, 1]`.
    pub fn color_for(self, t: f32) -> Color32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Colormap::Gray => {
                let v = to_byte(t);
                Color32::from_rgb(v, v, v)
            }
            Colormap::InvertedGray => {
                let v = to_byte(1.0 - t);
                Color32::from_rgb(v, v, v)
            }
            Colormap::Heat => {
                // Blue (cold) through red (hot), brightening as it goes.
                let hsl = Hsl::new(240.0 * (1.0 - t), 0.85, 0.15 + 0.45 * t);
                let rgb: Srgb = hsl.into_color();
                Color32::from_rgb(to_byte(rgb.red), to_byte(rgb.green), to_byte(rgb.blue))
            }
        }
    }
}

fn to_byte(t: f32) -> u8 {
    (t.clamp(0.0, 1.0) * 255.0).round() as u8
}

// ---------------------------------------------------------------------------
// Rasterisation
// ---------------------------------------------------------------------------

/// Row-major RGB bytes (3 per cell) of `grid` under `colormap`.
pub fn render_rgb(grid: &ImageGrid, colormap: Colormap) -> Vec<u8> {
    let scaling = Scaling::of(grid);
    grid.as_flat()
        .iter()
        .flat_map(|&v| {
            let c = colormap.color_for(scaling.normalize(v));
            [c.r(), c.g(), c.b()]
        })
        .collect()
}

/// The grid as an egui image, one texel per cell.
pub fn to_color_image(grid: &ImageGrid, colormap: Colormap) -> ColorImage {
    ColorImage::from_rgb([IMG_EDGE, IMG_EDGE], &render_rgb(grid, colormap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::IMG_LEN;

    #[test]
    fn scaling_maps_min_and_max_to_ends() {
        let grid = ImageGrid::from_fn(|r, c| (r * IMG_EDGE + c) as f32 - 100.0);
        let s = Scaling::of(&grid);
        assert_eq!(s.normalize(-100.0), 0.0);
        assert_eq!(s.normalize(683.0), 1.0);
        assert!((s.normalize(291.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn constant_image_renders_black() {
        let grid = ImageGrid::from_flat(vec![0.7; IMG_LEN]).unwrap();
        let rgb = render_rgb(&grid, Colormap::Gray);
        assert_eq!(rgb.len(), IMG_LEN * 3);
        assert!(rgb.iter().all(|&b| b == 0));
    }

    #[test]
    fn gray_ends_are_black_and_white() {
        let grid = ImageGrid::from_fn(|r, c| if (r, c) == (27, 27) { 2.0 } else { 0.0 });
        let rgb = render_rgb(&grid, Colormap::Gray);
        assert_eq!(&rgb[..3], &[0, 0, 0]);
        assert_eq!(&rgb[rgb.len() - 3..], &[255, 255, 255]);

        let inverted = render_rgb(&grid, Colormap::InvertedGray);
        assert_eq!(&inverted[..3], &[255, 255, 255]);
    }

    #[test]
    fn nan_cells_render_as_minimum() {
        let grid = ImageGrid::from_fn(|r, _| if r == 0 { f32::NAN } else { r as f32 });
        let s = Scaling::of(&grid);
        assert_eq!(s.normalize(f32::NAN), 0.0);
        assert_eq!(s.min, 1.0);
    }

    #[test]
    fn extreme_finite_range_keeps_contrast() {
        let grid = ImageGrid::from_fn(|r, c| match (r, c) {
            (0, 0) => -3.0e38,
            (27, 27) => 3.0e38,
            _ => 0.0,
        });
        let rgb = render_rgb(&grid, Colormap::Gray);
        assert_eq!(&rgb[..3], &[0, 0, 0]);
        assert_eq!(&rgb[rgb.len() - 3..], &[255, 255, 255]);
        assert_eq!(&rgb[3..6], &[128, 128, 128]);
    }

    #[test]
    fn infinite_cells_clamp_to_range_ends() {
        let grid = ImageGrid::from_fn(|r, c| match (r, c) {
            (0, 0) => f32::INFINITY,
            (0, 1) => f32::NEG_INFINITY,
            _ => (r + c) as f32,
        });
        let s = Scaling::of(&grid);
        assert_eq!((s.min, s.max), (1.0, 54.0));

        let rgb = render_rgb(&grid, Colormap::Gray);
        assert_eq!(&rgb[..3], &[255, 255, 255]);
        assert_eq!(&rgb[3..6], &[0, 0, 0]);
        assert_eq!(&rgb[rgb.len() - 3..], &[255, 255, 255]);
        assert!(rgb.iter().any(|&b| b != 0 && b != 255));
    }

    #[test]
    fn tiny_span_is_not_treated_as_constant() {
        let grid = ImageGrid::from_fn(|r, _| if r == 0 { 1.0e-8 } else { 0.0 });
        let rgb = render_rgb(&grid, Colormap::Gray);
        assert_eq!(&rgb[..3], &[255, 255, 255]);
        assert_eq!(&rgb[rgb.len() - 3..], &[0, 0, 0]);
    }

    #[test]
    fn heat_runs_from_blue_to_red() {
        let cold = Colormap::Heat.color_for(0.0);
        let hot = Colormap::Heat.color_for(1.0);
        assert!(cold.b() > cold.r());
        assert!(hot.r() > hot.b());
    }

    #[test]
    fn color_image_has_one_texel_per_cell() {
        let grid = ImageGrid::from_fn(|r, c| (r + c) as f32);
        let image = to_color_image(&grid, Colormap::Gray);
        assert_eq!(image.size, [IMG_EDGE, IMG_EDGE]);
        assert_eq!(image.pixels.len(), IMG_LEN);
    }
}
