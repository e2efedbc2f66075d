//! Command line arguments and the top-level driver used by the binary.

use ::clap::Parser;
use ::std::{ffi::OsString, io::Write, path::PathBuf};

use crate::{capture::Capture, errors::Result, render::write_report};

/// Printed when no capture path is given.
pub const USAGE: &str = "Usage: keyscribe <capture.bin>";

/// Decode a raw USB HID keyboard capture into a best-effort text stream.
///
/// The capture is decoded twice, once assuming key-first records and once
/// assuming modifier-first records, and both results are printed.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the raw binary capture.
    pub capture: Option<PathBuf>,

    /// Anything after the capture path is accepted and ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<OsString>,
}

/// Runs the decoder for the given arguments, writing the report to `out`.
///
/// Without a capture path only the usage line is written and no file is
/// touched.
pub fn run<W: Write>(args: Args, out: &mut W) -> Result<()> {
    let Some(path) = args.capture else {
        writeln!(out, "{USAGE}")?;
        return Ok(());
    };

    let capture = Capture::open(path)?;
    write_report(out, &capture)?;
    out.flush()?;
    Ok(())
}
