//! Command-line grayscale rescaler
//!
//! ```text
//! rescale <input> <output> <width>x<height> [--size <width>x<height>]
//! ```
//!
//! Files with a `.pgm` extension are read and written as binary PGM
//! and carry their own dimensions; anything else is treated as a
//! headerless raw raster, in which case the input requires `--size`.

use rescale::io::{self, IoError};
use rescale::{GrayRaster, RescaleError};
use std::env;
use std::path::Path;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("usage: rescale <input> <output> <width>x<height> [--size <width>x<height>]")]
    Usage,

    #[error("invalid size '{0}': expected <width>x<height>")]
    BadSize(String),

    #[error("raw input requires --size <width>x<height>")]
    MissingSize,

    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Rescale(#[from] RescaleError),
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rescale: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let mut positional = Vec::new();
    let mut src_size = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "--size" {
            let value = iter.next().ok_or(CliError::Usage)?;
            src_size = Some(parse_size(value)?);
        } else {
            positional.push(arg.as_str());
        }
    }

    let &[input, output, dest_size] = positional.as_slice() else {
        return Err(CliError::Usage);
    };
    let (wd, hd) = parse_size(dest_size)?;

    let source = if is_pgm(input) {
        io::read_pgm(input)?
    } else {
        let (ws, hs) = src_size.ok_or(CliError::MissingSize)?;
        io::read_raw(input, ws, hs)?
    };

    let result = source.rescale_to(wd, hd)?;

    if is_pgm(output) {
        io::write_pgm(&result, output)?;
    } else {
        io::write_raw(&result, output)?;
    }

    Ok(())
}

/// Parse a `<width>x<height>` argument.
fn parse_size(arg: &str) -> Result<(u32, u32), CliError> {
    let (w, h) = arg
        .split_once('x')
        .ok_or_else(|| CliError::BadSize(arg.to_string()))?;
    let width = w.parse().map_err(|_| CliError::BadSize(arg.to_string()))?;
    let height = h.parse().map_err(|_| CliError::BadSize(arg.to_string()))?;
    Ok((width, height))
}

fn is_pgm(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pgm"))
}
