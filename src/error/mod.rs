//! Error types for the PDF compression wrapper.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for the library.
pub type Result<T> = std::result::Result<T, SqueezeError>;

/// Main error type for the PDF compression wrapper.
#[derive(Error, Debug)]
pub enum SqueezeError {
    /// The input PDF does not exist.
    #[error("Input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    /// The input PDF is empty, so no size reduction can be computed.
    #[error("Input file '{}' is empty; cannot compute a size reduction", .0.display())]
    EmptyInput(PathBuf),

    /// The requested preset is not part of the preset table.
    #[error("Invalid quality preset '{name}'. Available presets: {}", .valid.join(", "))]
    UnknownPreset {
        /// Name that was requested.
        name: String,
        /// All recognized preset names.
        valid: Vec<&'static str>,
    },

    /// The Ghostscript executable could not be launched.
    #[error(
        "'{program}' not found. Please ensure Ghostscript is installed and in your system's PATH"
    )]
    ExecutableNotFound {
        /// Program that was looked up.
        program: String,
    },

    /// Ghostscript ran but reported failure.
    #[error("Ghostscript failed ({})\nSTDOUT: {stdout}\nSTDERR: {stderr}", exit_label(.code))]
    ToolFailed {
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
        /// Captured standard output.
        stdout: String,
        /// Captured standard error.
        stderr: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl From<toml::de::Error> for SqueezeError {
    fn from(err: toml::de::Error) -> Self {
        SqueezeError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_preset_lists_names() {
        let err = SqueezeError::UnknownPreset {
            name: "tiny".into(),
            valid: vec!["screen", "ebook"],
        };
        assert_eq!(
            err.to_string(),
            "Invalid quality preset 'tiny'. Available presets: screen, ebook"
        );
    }

    #[test]
    fn test_empty_input_message() {
        let err = SqueezeError::EmptyInput(PathBuf::from("blank.pdf"));
        assert_eq!(
            err.to_string(),
            "Input file 'blank.pdf' is empty; cannot compute a size reduction"
        );
    }

    #[test]
    fn test_tool_failed_message() {
        let err = SqueezeError::ToolFailed {
            code: Some(1),
            stdout: String::new(),
            stderr: "Unrecoverable error".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("exit code 1"));
        assert!(msg.contains("STDERR: Unrecoverable error"));

        let killed = SqueezeError::ToolFailed {
            code: None,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(killed.to_string().contains("terminated by signal"));
    }
}
