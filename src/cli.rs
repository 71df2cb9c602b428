//! Shared plumbing for the `compress` and `decompress` binaries.

use clap::Parser;
use log::{LevelFilter, warn};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::ffi::OsString;
use std::path::PathBuf;

/// Input and output paths taken by both binaries
#[derive(Parser, Debug)]
pub struct FileArgs {
    /// File to read
    pub infile: PathBuf,
    /// File to write
    pub outfile: PathBuf,
    /// Log tree details as well as the summary
    #[clap(short, long)]
    pub verbose: bool,
}

impl FileArgs {
    /// Parse the process arguments. On the wrong number of arguments, print
    /// the usage message and return `None`.
    pub fn parse_or_usage() -> Option<Self> {
        Self::parse_or_usage_from(std::env::args_os())
    }

    pub fn parse_or_usage_from<I, T>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(args) => Some(args),
            Err(e) => {
                // Help, version and usage errors all end the run quietly
                if let Err(print_err) = e.print() {
                    // Only reaches a logger installed by the caller
                    warn!("Could not print usage: {print_err}");
                }
                None
            }
        }
    }
}

/// Install the terminal logger on stderr.
pub fn init_logging(verbose: bool) {
    // Available log levels are Error, Warn, Info, Debug, Trace
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Logger already installed: {e}");
    }
}

/// Output size as a percentage of input size.
pub fn ratio(input: usize, output: usize) -> f64 {
    if input == 0 {
        0.0
    } else {
        output as f64 * 100.0 / input as f64
    }
}
