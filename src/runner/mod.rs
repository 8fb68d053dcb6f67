//! External tool execution.
//!
//! The pipeline talks to Ghostscript only through [`ToolRunner`], so tests can
//! substitute a recording fake for the real subprocess.

use std::ffi::{OsStr, OsString};
use std::io::ErrorKind;
use std::process::Command;

use crate::error::{Result, SqueezeError};

/// Captured outcome of one external process run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code, `None` if terminated by a signal.
    pub code: Option<i32>,
    /// Whether the process reported success.
    pub success: bool,
    /// Standard output, lossily decoded.
    pub stdout: String,
    /// Standard error, lossily decoded.
    pub stderr: String,
}

#[cfg(test)]
impl ToolOutput {
    /// Output of a process that exited with status zero.
    pub(crate) fn succeeded() -> Self {
        Self {
            code: Some(0),
            success: true,
            ..Default::default()
        }
    }

    /// Output of a process that exited with the given non-zero code.
    pub(crate) fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Runs an external program to completion.
pub trait ToolRunner {
    /// Launch `program` with `args`, block until it exits and capture its output.
    ///
    /// A program that cannot be found yields [`SqueezeError::ExecutableNotFound`].
    /// A non-zero exit is not an error at this level; it is reported through
    /// [`ToolOutput::success`].
    fn run(&self, program: &OsStr, args: &[OsString]) -> Result<ToolOutput>;
}

impl<R: ToolRunner + ?Sized> ToolRunner for &R {
    fn run(&self, program: &OsStr, args: &[OsString]) -> Result<ToolOutput> {
        (**self).run(program, args)
    }
}

/// Runs programs as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, program: &OsStr, args: &[OsString]) -> Result<ToolOutput> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => SqueezeError::ExecutableNotFound {
                    program: program.to_string_lossy().into_owned(),
                },
                _ => SqueezeError::Io(e),
            })?;

        Ok(ToolOutput {
            code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
