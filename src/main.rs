//! PDF Compression CLI Tool
//!
//! Shrinks PDF files by running Ghostscript with a named quality preset.

use clap::Parser;
use pdf_squeeze::cli::{run, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
