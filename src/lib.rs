//! # img2ascii
//!
//! Convert a raster image into text art by mapping each pixel's brightness
//! to a character from an ordered gradient key.
//!
//! # Architecture: One Linear Pipeline
//!
//! ```text
//! decode → resample → brightness → quantize → render
//! ```
//!
//! Every stage is a pure function over simple values; the only I/O lives at
//! the edges (decoding the source, printing/saving the result). Per-pixel
//! work has no cross-cell dependencies, so the brightness pass runs in
//! parallel across rows while still assembling output in row-major order.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`resample`] | Pure dimension math — fit a source within a bounding box, downscale only |
//! | [`brightness`] | Photometric models (`average`, `lightness`, `luminosity`) and the brightness grid |
//! | [`quantize`] | Gradient key validation and linear bucket quantization to characters |
//! | [`render`] | Row joining with horizontal character repetition |
//! | [`pipeline`] | Orchestration: decode, resize, map, quantize, render; error taxonomy |
//! | [`naming`] | `ascii_{mode}_{w}x{h}_{stem}.txt` filename convention for `--save` |
//! | [`output`] | Console formatting — metadata line, configuration block, rendered text |
//!
//! # Design Decisions
//!
//! ## Closed Mode Enum
//!
//! The brightness mode is a three-variant enum dispatched with `match`, not
//! string comparison threaded through the pipeline. Invalid mode strings are
//! rejected once, at the CLI boundary, by the `FromStr` parse.
//!
//! ## Explicit Gradient Key
//!
//! The gradient key is a validated value passed into quantization, never
//! ambient state baked into the quantizer. The quantizer stays pure and
//! testable with arbitrary keys; the 92-character default is just the CLI's
//! default value for it.
//!
//! ## Rounded Luminosity Weights
//!
//! The luminosity mode uses 0.21/0.72/0.07 — rounded approximations of the
//! conventional luma coefficients. They sum to exactly 1.0, which keeps
//! grayscale pixels invariant across all three modes, and they are the
//! documented behavior this tool reproduces.

pub mod brightness;
pub mod naming;
pub mod output;
pub mod pipeline;
pub mod quantize;
pub mod render;
pub mod resample;
