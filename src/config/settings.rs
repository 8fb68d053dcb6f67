//! User settings loaded from a TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::Preset;
use crate::error::{Result, SqueezeError};

/// Optional overrides read from a config file.
///
/// ```toml
/// ghostscript = "/opt/gs/bin/gs"
/// default_quality = "screen"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Ghostscript executable to run instead of the platform default.
    pub ghostscript: Option<PathBuf>,
    /// Preset used when `--quality` is not given.
    pub default_quality: Option<Preset>,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            SqueezeError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let settings = Self::from_toml(&text)?;
        log::debug!("Loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }
}
