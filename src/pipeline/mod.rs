//! Compression pipeline module.
//!
//! Validates a request, turns it into a Ghostscript command line, runs it and
//! measures the size difference between input and output.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;

use crate::config::{ghostscript, Preset};
use crate::error::{Result, SqueezeError};
use crate::runner::{SystemRunner, ToolRunner};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A validated compression request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionRequest {
    input: PathBuf,
    output: PathBuf,
    preset: Preset,
}

impl CompressionRequest {
    /// Create a request. Input existence is checked when the request runs.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, preset: Preset) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            preset,
        }
    }

    /// Source PDF.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Destination PDF.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Selected preset.
    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// Ghostscript arguments for this request, in invocation order.
    ///
    /// Paths are passed through as OS strings, untouched.
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::with_capacity(8);
        args.push(ghostscript::DEVICE.into());
        args.extend(ghostscript::BATCH_FLAGS.iter().map(OsString::from));
        args.extend(self.preset.flattened_params().map(OsString::from));

        let mut output_flag = OsString::from(ghostscript::OUTPUT_FILE_PREFIX);
        output_flag.push(&self.output);
        args.push(output_flag);
        args.push(self.input.clone().into_os_string());
        args
    }
}

/// Result of a compression operation.
#[derive(Debug, Clone, Serialize)]
pub struct CompressionResult {
    /// Original file path.
    pub input_path: PathBuf,
    /// Compressed file path.
    pub output_path: PathBuf,
    /// Preset that was applied.
    pub preset: Preset,
    /// Original size in bytes.
    pub original_size: u64,
    /// Compressed size in bytes.
    pub compressed_size: u64,
    /// Size reduction in percent; negative when the output grew.
    pub reduction_percent: f64,
    /// Wall time spent in Ghostscript, in milliseconds.
    pub elapsed_ms: u64,
}

impl CompressionResult {
    /// Original size in megabytes.
    pub fn original_mb(&self) -> f64 {
        self.original_size as f64 / BYTES_PER_MB
    }

    /// Compressed size in megabytes.
    pub fn compressed_mb(&self) -> f64 {
        self.compressed_size as f64 / BYTES_PER_MB
    }
}

/// Percentage saved going from `original` to `compressed` bytes.
///
/// `None` when `original` is zero, since no ratio exists.
pub fn reduction_percent(original: u64, compressed: u64) -> Option<f64> {
    if original == 0 {
        None
    } else {
        Some((1.0 - (compressed as f64 / original as f64)) * 100.0)
    }
}

/// Compression pipeline driving one Ghostscript run per file.
pub struct CompressionPipeline<R = SystemRunner> {
    runner: R,
    executable: Option<PathBuf>,
}

impl CompressionPipeline<SystemRunner> {
    /// Create a pipeline that spawns real processes.
    pub fn new() -> Self {
        Self::with_runner(SystemRunner)
    }
}

impl Default for CompressionPipeline<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ToolRunner> CompressionPipeline<R> {
    /// Create a pipeline on top of a custom runner.
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            executable: None,
        }
    }

    /// Override the Ghostscript executable. `None` keeps the platform default.
    pub fn executable(mut self, executable: Option<PathBuf>) -> Self {
        self.executable = executable;
        self
    }

    /// Program that will be launched.
    pub fn program(&self) -> OsString {
        match &self.executable {
            Some(path) => path.clone().into_os_string(),
            None => OsString::from(ghostscript::default_executable()),
        }
    }

    /// Validate raw inputs into a request.
    ///
    /// The input is checked before the preset name, so a missing file is
    /// reported even when the preset is also wrong.
    pub fn request<P, Q>(&self, input: P, output: Q, preset: &str) -> Result<CompressionRequest>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let input = input.as_ref();
        ensure_input_exists(input)?;
        let preset = Preset::from_name(preset)?;
        Ok(CompressionRequest::new(input, output.as_ref(), preset))
    }

    /// Program and arguments that `compress` would run.
    pub fn command_line(&self, request: &CompressionRequest) -> (OsString, Vec<OsString>) {
        (self.program(), request.args())
    }

    /// Validate inputs and compress in one step.
    pub fn compress_named<P, Q>(
        &self,
        input: P,
        output: Q,
        preset: &str,
    ) -> Result<CompressionResult>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let request = self.request(input, output, preset)?;
        self.compress(&request)
    }

    /// Run Ghostscript for `request` and measure the outcome.
    pub fn compress(&self, request: &CompressionRequest) -> Result<CompressionResult> {
        ensure_input_exists(request.input())?;

        let (program, args) = self.command_line(request);
        log::info!(
            "Compressing {} with preset '{}'",
            request.input().display(),
            request.preset()
        );
        log::debug!("Running {} {:?}", program.to_string_lossy(), args);

        let start = Instant::now();
        let output = self.runner.run(&program, &args)?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        if !output.success {
            log::debug!("Ghostscript exited with {:?}", output.code);
            return Err(SqueezeError::ToolFailed {
                code: output.code,
                stdout: output.stdout,
                stderr: output.stderr,
            });
        }

        let original_size = std::fs::metadata(request.input())?.len();
        let compressed_size = std::fs::metadata(request.output())?.len();
        let reduction = reduction_percent(original_size, compressed_size)
            .ok_or_else(|| SqueezeError::EmptyInput(request.input().to_path_buf()))?;

        log::info!(
            "{} -> {} bytes ({:.2}%) in {} ms",
            original_size,
            compressed_size,
            reduction,
            elapsed_ms
        );

        Ok(CompressionResult {
            input_path: request.input().to_path_buf(),
            output_path: request.output().to_path_buf(),
            preset: request.preset(),
            original_size,
            compressed_size,
            reduction_percent: reduction,
            elapsed_ms,
        })
    }
}

fn ensure_input_exists(input: &Path) -> Result<()> {
    if input.exists() {
        Ok(())
    } else {
        Err(SqueezeError::InputNotFound(input.to_path_buf()))
    }
}
