//! PDF Compression Library
//!
//! A thin, typed layer over Ghostscript's `pdfwrite` device: pick a quality
//! preset, run Ghostscript once and measure how much the file shrank.
//!
//! # Presets
//!
//! - **screen**: 72 dpi, smallest output
//! - **ebook**: 150 dpi, the default
//! - **printer**: 300 dpi
//! - **prepress**: color preserving, largest output
//! - **architectural**: tuned for scanned plans with vector overlays
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pdf_squeeze::CompressionPipeline;
//!
//! let pipeline = CompressionPipeline::new();
//! let result = pipeline.compress_named("plans.pdf", "plans-small.pdf", "architectural")?;
//! println!("Reduction: {:.2}%", result.reduction_percent);
//! ```
//!
//! Ghostscript is located as `gs` (`gswin64c` on Windows) unless an explicit
//! executable is configured with [`CompressionPipeline::executable`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod runner;

// Re-export commonly used types
pub use config::{Preset, Settings};
pub use error::{Result, SqueezeError};
pub use pipeline::{CompressionPipeline, CompressionRequest, CompressionResult};
pub use runner::{SystemRunner, ToolOutput, ToolRunner};

/// Library version information.
pub mod version {
    /// Library version string.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Library name.
    pub const NAME: &str = env!("CARGO_PKG_NAME");

    /// Get full version string.
    pub fn full_version() -> String {
        format!("{} {}", NAME, VERSION)
    }
}
