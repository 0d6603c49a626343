use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use argh::FromArgs;
use log::{error, info};
use sprite_core::{
    frame::{DEFAULT_HEIGHT, DEFAULT_WIDTH, Resolution},
    header,
    ident,
};

use crate::{
    error::{Error, Result},
    pipeline::Config,
    std_fs::{StdDirectory, StdFileWriter},
};

mod error;
mod loader;
mod pipeline;
mod std_fs;
#[cfg(test)]
mod testutil;

#[derive(FromArgs)]
/// Convert a folder of BMP frames into a C header of RGB565 arrays.
struct Args {
    /// header file name, e.g. sprite.h; only its file name is used.
    /// Names starting with '-' must follow a `--` separator
    #[argh(positional)]
    output_header: String,

    /// folder to scan for *.bmp files
    #[argh(positional)]
    input_folder: PathBuf,

    /// expected frame width in pixels
    #[argh(option, default = "DEFAULT_WIDTH")]
    width: u32,

    /// expected frame height in pixels
    #[argh(option, default = "DEFAULT_HEIGHT")]
    height: u32,

    /// directory the header is written to
    #[argh(option, default = "PathBuf::from(\"output\")")]
    output_dir: PathBuf,

    /// fail instead of warning when a frame has the wrong size
    #[argh(switch)]
    strict: bool,
}

struct Generated {
    path: PathBuf,
    frames: usize,
}

fn run(args: &Args) -> Result<Generated> {
    if StdDirectory::open(&args.input_folder).is_none() {
        return Err(Error::InvalidInputFolder(args.input_folder.clone()));
    }
    let output_dir =
        StdDirectory::create_all(&args.output_dir).map_err(|e| Error::io(&args.output_dir, e))?;

    let header_path = Path::new(&args.output_header);
    let (Some(file_name), Some(stem)) = (header_path.file_name(), header_path.file_stem()) else {
        return Err(Error::InvalidOutputName(args.output_header.clone()));
    };
    let path = output_dir.path.join(file_name);
    let base = ident::sanitize(&stem.to_string_lossy());

    let config = Config {
        resolution: Resolution::new(args.width, args.height),
        strict: args.strict,
    };
    let frames = pipeline::collect_frames(&args.input_folder, &config)?;

    let mut out = StdFileWriter::create(&path).map_err(|source| Error::Create {
        path: path.clone(),
        source,
    })?;
    header::write(
        &mut out,
        &file_name.to_string_lossy(),
        &base,
        config.resolution,
        &frames,
    )
    .map_err(|error| Error::Write {
        path: path.clone(),
        error,
    })?;
    info!("Wrote {} as {}_sheet", path.display(), base);

    Ok(Generated {
        path,
        frames: frames.len(),
    })
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    match run(&args) {
        Ok(generated) => {
            println!(
                "Header file '{}' generated successfully with {} frames.",
                generated.path.display(),
                generated.frames
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
