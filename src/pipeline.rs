//! The decode → resample → brightness → quantize → render pipeline.
//!
//! A single linear pass with no branching state machine:
//!
//! ```text
//! 1. Decode     source file  →  RgbImage          (image crate)
//! 2. Resample   fit_within   →  Lanczos3 resize   (only when the bound shrinks)
//! 3. Brightness per pixel    →  Vec<Vec<f64>>     (rayon across rows)
//! 4. Quantize   per cell     →  Vec<Vec<char>>
//! 5. Render     rows         →  newline-joined String
//! ```
//!
//! All intermediate grids are scoped to one [`run`] call; nothing persists
//! across invocations. Every error is fatal to the invocation — the tool
//! has no notion of partial success.

use crate::brightness::{BrightnessMode, brightness_grid};
use crate::quantize::{GradientKey, ascii_grid};
use crate::render::render;
use crate::resample::{SizeBound, fit_within};
use image::imageops::FilterType;
use image::{ColorType, ImageFormat, ImageReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// No source path supplied — checked before any decode attempt.
    #[error("no source image specified")]
    MissingSource,
    /// The source could not be opened or is not a readable raster image.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Everything a render needs, resolved once at the boundary.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub source: Option<PathBuf>,
    pub bound: SizeBound,
    pub mode: BrightnessMode,
    pub repeat: usize,
    pub key: GradientKey,
    pub save: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            source: None,
            bound: SizeBound::Original,
            mode: BrightnessMode::default(),
            repeat: 3,
            key: GradientKey::default(),
            save: false,
        }
    }
}

/// A finished rendering plus the metadata the console surface reports.
#[derive(Debug, Clone)]
pub struct Rendering {
    /// The full text, rows joined by `\n`, no trailing newline.
    pub text: String,
    /// Resolved grid width after resampling.
    pub width: u32,
    /// Resolved grid height after resampling.
    pub height: u32,
    /// Dimensions of the decoded source, before resampling.
    pub source_width: u32,
    pub source_height: u32,
    /// Container format, when the decoder could determine it.
    pub format: Option<ImageFormat>,
    /// Color type of the decoded image (before RGB conversion).
    pub color: ColorType,
}

/// Run the full pipeline for one configuration.
pub fn run(config: &RenderConfig) -> Result<Rendering, PipelineError> {
    let source = config
        .source
        .as_deref()
        .ok_or(PipelineError::MissingSource)?;

    let (image, format, color) = decode(source)?;
    let (source_width, source_height) = image.dimensions();

    let (width, height) = fit_within(image.dimensions(), config.bound);
    let image = if (width, height) == image.dimensions() {
        image
    } else {
        // Filter choice is not load-bearing; Lanczos3 resamples cleanly.
        image::imageops::resize(&image, width, height, FilterType::Lanczos3)
    };

    let brightness = brightness_grid(&image, config.mode);
    let ascii = ascii_grid(&brightness, &config.key);
    let text = render(&ascii, config.repeat);

    Ok(Rendering {
        text,
        width,
        height,
        source_width,
        source_height,
        format,
        color,
    })
}

/// Open and decode the source into RGB, capturing format and color type.
fn decode(
    source: &Path,
) -> Result<(image::RgbImage, Option<ImageFormat>, ColorType), PipelineError> {
    let reader = ImageReader::open(source)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| PipelineError::Decode {
            path: source.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?;
    let format = reader.format();
    let decoded = reader.decode().map_err(|e| PipelineError::Decode {
        path: source.to_path_buf(),
        source: e,
    })?;
    let color = decoded.color();
    Ok((decoded.to_rgb8(), format, color))
}
