//! Per-pixel brightness under selectable photometric models.
//!
//! Three models are supported, matching the classic grayscale conversion
//! trio:
//!
//! | Mode | Formula |
//! |---|---|
//! | `average` | (R + G + B) / 3 |
//! | `lightness` | (max(R,G,B) + min(R,G,B)) / 2 |
//! | `luminosity` | 0.21·R + 0.72·G + 0.07·B |
//!
//! The luminosity weights are deliberately the rounded two-decimal values,
//! not the ITU luma coefficients {0.2126, 0.7152, 0.0722}. They sum to 1.0
//! exactly, which keeps grayscale pixels invariant across all three modes.

use image::{Rgb, RgbImage};
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A brightness mode string outside the closed set of three.
///
/// Raised at the CLI boundary; the mapper itself only accepts the enum.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported brightness mode `{0}` (expected average, lightness, or luminosity)")]
pub struct UnsupportedMode(pub String);

/// Photometric model for mapping an RGB pixel to a scalar brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrightnessMode {
    /// Arithmetic mean of the three channels.
    #[default]
    Average,
    /// Midpoint of the brightest and darkest channel (HSL lightness).
    Lightness,
    /// Perceptually weighted sum favouring green.
    Luminosity,
}

impl BrightnessMode {
    pub fn name(self) -> &'static str {
        match self {
            BrightnessMode::Average => "average",
            BrightnessMode::Lightness => "lightness",
            BrightnessMode::Luminosity => "luminosity",
        }
    }
}

impl fmt::Display for BrightnessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BrightnessMode {
    type Err = UnsupportedMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "average" => Ok(BrightnessMode::Average),
            "lightness" => Ok(BrightnessMode::Lightness),
            "luminosity" => Ok(BrightnessMode::Luminosity),
            other => Err(UnsupportedMode(other.to_string())),
        }
    }
}

/// Brightness of a single pixel in [0, 255] under the given mode.
///
/// Pure function of its inputs; each cell of the image is independent.
pub fn brightness(pixel: Rgb<u8>, mode: BrightnessMode) -> f64 {
    let [r, g, b] = pixel.0.map(f64::from);
    match mode {
        BrightnessMode::Average => (r + g + b) / 3.0,
        BrightnessMode::Lightness => (r.max(g).max(b) + r.min(g).min(b)) / 2.0,
        BrightnessMode::Luminosity => 0.21 * r + 0.72 * g + 0.07 * b,
    }
}

/// Map every pixel of `image` to its brightness, row-major.
///
/// Rows carry no cross-dependencies, so they are computed in parallel with
/// rayon; the indexed collect reassembles them in source order, keeping the
/// output deterministic.
pub fn brightness_grid(image: &RgbImage, mode: BrightnessMode) -> Vec<Vec<f64>> {
    (0..image.height())
        .into_par_iter()
        .map(|y| {
            (0..image.width())
                .map(|x| brightness(*image.get_pixel(x, y), mode))
                .collect()
        })
        .collect()
}
