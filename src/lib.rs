//! Viewer for raw 28×28 float32 grayscale images.
//!
//! A file holds 784 native-endian `f32` values, no header. [`cli::run`]
//! validates the arguments and the file, then hands the reshaped
//! [`data::model::ImageGrid`] to a [`viewer::Viewer`].

pub mod app;
pub mod cli;
pub mod color;
pub mod data;
pub mod error;
pub mod export;
pub mod state;
pub mod ui;
pub mod viewer;
