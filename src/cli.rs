use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;

use crate::data::loader;
use crate::data::model::{IMG_LEN, PREVIEW_THRESHOLD};
use crate::error::PlotError;
use crate::viewer::Viewer;

/// Run the tool on `args` (program name first), printing diagnostics to
/// `out`. Returns the process exit code.
pub fn run<S: AsRef<OsStr>>(args: &[S], out: &mut impl Write, viewer: &mut impl Viewer) -> u8 {
    match try_run(args, viewer) {
        Ok(()) => 0,
        Err(err) => {
            match &err {
                PlotError::LengthMismatch {
                    values,
                    trailing_bytes,
                } => log::warn!(
                    "Expected {IMG_LEN} values, found {values} (+{trailing_bytes} trailing bytes)"
                ),
                PlotError::Read { .. } | PlotError::Viewer(_) => log::error!("{err}"),
                _ => {}
            }
            if let Err(e) = writeln!(out, "{err}") {
                log::error!("Failed to print diagnostic: {e}");
            }
            err.exit_code()
        }
    }
}

/// The path argument, if exactly one was given.
pub fn parse_args<S: AsRef<OsStr>>(args: &[S]) -> Result<&Path, PlotError> {
    match args {
        [_, path] => Ok(Path::new(path.as_ref())),
        _ => Err(PlotError::Usage),
    }
}

fn try_run<S: AsRef<OsStr>>(args: &[S], viewer: &mut impl Viewer) -> Result<(), PlotError> {
    let path = parse_args(args)?;
    if !path.exists() {
        return Err(PlotError::InvalidPath(path.to_string_lossy().into_owned()));
    }

    let grid = loader::load_image(path)?;
    log::info!("Loaded {}: {}", path.display(), grid.describe());
    log::debug!("Preview:\n{}", grid.ascii_preview(PREVIEW_THRESHOLD));

    viewer.show(path, grid)
}
