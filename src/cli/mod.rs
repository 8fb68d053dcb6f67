//! Command-line interface for the PDF compression tool.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{Preset, Settings};
use crate::error::{Result, SqueezeError};
use crate::pipeline::{CompressionPipeline, CompressionResult};
use crate::runner::{SystemRunner, ToolRunner};

/// Compress PDF files with Ghostscript.
///
/// Picks one of a fixed set of quality presets, runs Ghostscript's pdfwrite
/// device and reports how much smaller the result is.
#[derive(Parser, Debug)]
#[command(name = "pdf-squeeze")]
#[command(version = crate::version::VERSION)]
#[command(about = "Shrink PDF files with Ghostscript quality presets")]
#[command(long_about = None)]
pub struct Cli {
    /// Path to the input PDF file
    #[arg(required_unless_present = "list_presets")]
    pub input: Option<PathBuf>,

    /// Path for the compressed output PDF file
    #[arg(required_unless_present = "list_presets")]
    pub output: Option<PathBuf>,

    /// Compression quality preset [default: ebook]
    #[arg(short, long, value_enum)]
    pub quality: Option<Preset>,

    /// Ghostscript executable to use instead of gs / gswin64c
    #[arg(long, value_name = "PATH")]
    pub gs: Option<PathBuf>,

    /// TOML settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the Ghostscript command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// List the available presets and exit
    #[arg(long)]
    pub list_presets: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the CLI application.
pub fn run(cli: Cli) -> Result<()> {
    let filter = if cli.verbose {
        "debug"
    } else if cli.json {
        "warn"
    } else {
        "info"
    };
    // Ignore double initialization when embedded or under test.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .try_init();

    log::debug!("{}", crate::version::full_version());

    let stdout = io::stdout();
    run_with(cli, SystemRunner, &mut stdout.lock())
}

/// Run the CLI against an arbitrary runner, writing the report to `out`.
pub fn run_with<R, W>(cli: Cli, runner: R, out: &mut W) -> Result<()>
where
    R: ToolRunner,
    W: Write,
{
    if cli.list_presets {
        print_presets(out)?;
        return Ok(());
    }

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let preset = cli
        .quality
        .or(settings.default_quality)
        .unwrap_or_default();

    let (input, output) = match (cli.input, cli.output) {
        (Some(input), Some(output)) => (input, output),
        _ => {
            return Err(SqueezeError::Config(
                "input and output paths are required".into(),
            ))
        }
    };

    let pipeline =
        CompressionPipeline::with_runner(runner).executable(cli.gs.or(settings.ghostscript));
    let request = pipeline.request(&input, &output, preset.name())?;

    if cli.dry_run {
        let (program, args) = pipeline.command_line(&request);
        let mut line = quote(&program.to_string_lossy());
        for arg in &args {
            line.push(' ');
            line.push_str(&quote(&arg.to_string_lossy()));
        }
        writeln!(out, "{}", line)?;
        return Ok(());
    }

    if !cli.json {
        writeln!(out, "Starting compression for '{}'...", input.display())?;
        writeln!(
            out,
            "Using quality preset: '{}' - {}",
            preset,
            preset.description()
        )?;
        out.flush()?;
    }

    let spinner = if cli.json {
        ProgressBar::hidden()
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner());
        spinner.set_message("Running Ghostscript...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    };
    let result = pipeline.compress(&request);
    spinner.finish_and_clear();
    let result = result?;

    if cli.json {
        serde_json::to_writer_pretty(&mut *out, &result).map_err(io::Error::from)?;
        writeln!(out)?;
    } else {
        print_compression_result(out, &result)?;
    }

    Ok(())
}

/// Print the preset table.
fn print_presets<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Available presets:")?;
    for preset in Preset::ALL {
        let marker = if preset == Preset::default() {
            " (default)"
        } else {
            ""
        };
        writeln!(
            out,
            "  {:<14} {}{}",
            preset.name(),
            preset.description(),
            marker
        )?;
    }
    Ok(())
}

/// Print compression result.
fn print_compression_result<W: Write>(out: &mut W, result: &CompressionResult) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Compression Complete ---")?;
    writeln!(out, "Original file size: {:.2} MB", result.original_mb())?;
    writeln!(out, "Compressed file size: {:.2} MB", result.compressed_mb())?;
    writeln!(out, "Reduction: {:.2}%", result.reduction_percent)?;
    writeln!(out, "--------------------------")
}

fn quote(arg: &str) -> String {
    if arg.is_empty() || arg.contains(|c: char| c.is_whitespace() || c == '\'' || c == '"') {
        format!("'{}'", arg.replace('\'', r"'\''"))
    } else {
        arg.to_string()
    }
}
