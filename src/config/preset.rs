//! Ghostscript quality presets.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SqueezeError};

/// Distiller parameters for the architectural preset: DCT for continuous-tone
/// images, JBIG2 for monochrome scans.
const ARCHITECTURAL_DISTILLER_PARAMS: &str = concat!(
    ".setdistillerparams << ",
    "/ColorImageDict << /QFactor 2.0 /Blend 1 /HSamples [2 1 1 2] /VSamples [2 1 1 2] /ImageType 1 /DCTEncode >> ",
    "/GrayImageDict << /QFactor 2.0 /Blend 1 /HSamples [2 1 1 2] /VSamples [2 1 1 2] /ImageType 1 /DCTEncode >> ",
    "/MonoImageDict << /K -1 /ImageType 3 /JBIG2Encode >> ",
    ">> setdistillerparams"
);

/// Named quality preset.
///
/// Each preset maps to a fixed, ordered list of argument groups. A group is
/// usually a single flag; multi-token groups (a flag followed by its literal
/// parameter) stay together so they are never reordered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Lowest quality, smallest size (72 dpi)
    Screen,
    /// Medium quality, medium size (150 dpi)
    #[default]
    Ebook,
    /// High quality for printing (300 dpi)
    Printer,
    /// Highest quality, color preserving
    Prepress,
    /// Hybrid raster/vector plans, aggressive image compression
    Architectural,
}

impl Preset {
    /// Every preset, in table order.
    pub const ALL: [Preset; 5] = [
        Preset::Screen,
        Preset::Ebook,
        Preset::Printer,
        Preset::Prepress,
        Preset::Architectural,
    ];

    /// Name used on the command line and in config files.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Screen => "screen",
            Preset::Ebook => "ebook",
            Preset::Printer => "printer",
            Preset::Prepress => "prepress",
            Preset::Architectural => "architectural",
        }
    }

    /// All recognized preset names, in table order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Preset::name).collect()
    }

    /// Look up a preset by its exact name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name() == name)
            .ok_or_else(|| SqueezeError::UnknownPreset {
                name: name.to_string(),
                valid: Self::names(),
            })
    }

    /// Human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Preset::Screen => "Lowest quality, smallest size (72 dpi). Good for screen viewing.",
            Preset::Ebook => "Medium quality, medium size (150 dpi). A good balance.",
            Preset::Printer => "High quality for printing (300 dpi). Larger file size.",
            Preset::Prepress => {
                "Highest quality, for professional printing, color preservation."
            }
            Preset::Architectural => {
                "Highly optimized for hybrid files like architectural plans. \
                 Aggressively compresses images while preserving vector quality."
            }
        }
    }

    /// Ghostscript argument groups for this preset.
    pub fn params(&self) -> &'static [&'static [&'static str]] {
        match self {
            Preset::Screen => &[&["-dPDFSETTINGS=/screen"]],
            Preset::Ebook => &[&["-dPDFSETTINGS=/ebook"]],
            Preset::Printer => &[&["-dPDFSETTINGS=/printer"]],
            Preset::Prepress => &[&["-dPDFSETTINGS=/prepress"]],
            Preset::Architectural => &[
                // general
                &["-dCompatibilityLevel=1.6"],
                &["-dDetectDuplicateImages=true"],
                &["-dCompressFonts=true"],
                &["-dSubsetFonts=true"],
                &["-sColorConversionStrategy=sRGB"],
                &["-dProcessColorModel=/DeviceRGB"],
                // raster downsampling
                &["-dDownsampleColorImages=true"],
                &["-dDownsampleGrayImages=true"],
                &["-dDownsampleMonoImages=true"],
                &["-dColorImageResolution=150"],
                &["-dGrayImageResolution=150"],
                &["-dMonoImageResolution=300"],
                // per-image-class encoders
                &["-c", ARCHITECTURAL_DISTILLER_PARAMS],
            ],
        }
    }

    /// Preset arguments with multi-token groups flattened in order.
    pub fn flattened_params(&self) -> impl Iterator<Item = &'static str> {
        self.params().iter().flat_map(|group| group.iter().copied())
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = SqueezeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
