//! Configuration: the preset table and user settings.

mod preset;
mod settings;

pub use preset::Preset;
pub use settings::Settings;

/// Ghostscript invocation constants.
pub mod ghostscript {
    /// Output device for PDF rewriting.
    pub const DEVICE: &str = "-sDEVICE=pdfwrite";
    /// Flags that keep Ghostscript non-interactive and silent.
    pub const BATCH_FLAGS: [&str; 3] = ["-dNOPAUSE", "-dBATCH", "-dQUIET"];
    /// Prefix for the output file flag.
    pub const OUTPUT_FILE_PREFIX: &str = "-sOutputFile=";

    /// Executable name for the current platform.
    pub fn default_executable() -> &'static str {
        if cfg!(windows) {
            "gswin64c"
        } else {
            "gs"
        }
    }
}
