use std::ffi::OsString;
use std::process::ExitCode;

use plot_img::cli;
use plot_img::viewer::NativeViewer;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<OsString> = std::env::args_os().collect();
    let code = cli::run(&args, &mut std::io::stdout(), &mut NativeViewer);
    ExitCode::from(code)
}
