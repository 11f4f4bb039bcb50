//! Pure calculation functions for target dimensions.
//!
//! All functions here are pure and testable without any I/O or images.
//! The bounding-box fit only ever scales *down*: an image already inside
//! the box keeps its original dimensions.

/// Maximum-size constraint resolved from the CLI's variadic positional.
///
/// - no values → [`SizeBound::Original`] (no resizing)
/// - one value `N` → [`SizeBound::Square`] (N×N box)
/// - two values `W H` → [`SizeBound::Rect`] (W×H box)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeBound {
    /// Keep the source dimensions unchanged.
    #[default]
    Original,
    /// Fit within an N×N box.
    Square(u32),
    /// Fit within a W×H box.
    Rect(u32, u32),
}

impl SizeBound {
    /// Resolve the 0, 1, or 2 positional values into a bound.
    ///
    /// Values beyond the second are ignored; the CLI caps the argument at
    /// two values so this is unreachable from the binary.
    pub fn from_values(values: &[u32]) -> Self {
        match values {
            [] => SizeBound::Original,
            [n] => SizeBound::Square(*n),
            [w, h, ..] => SizeBound::Rect(*w, *h),
        }
    }

    /// The box limits, or `None` when no resizing was requested.
    fn limits(self) -> Option<(u32, u32)> {
        match self {
            SizeBound::Original => None,
            SizeBound::Square(n) => Some((n, n)),
            SizeBound::Rect(w, h) => Some((w, h)),
        }
    }
}

/// Calculate target dimensions that fit `source` within `bound`.
///
/// The scale factor is the smaller of the two per-axis ratios, clamped to
/// at most 1.0 so the image is never enlarged. Both dimensions are scaled
/// by the same factor (aspect ratio preserved up to rounding), rounded to
/// the nearest integer, with a floor of 1 pixel per dimension.
///
/// # Examples
/// ```
/// # use img2ascii::resample::{SizeBound, fit_within};
/// // 800x600 into a 100x100 box → 100x75
/// assert_eq!(fit_within((800, 600), SizeBound::Square(100)), (100, 75));
///
/// // Already smaller than the box → unchanged
/// assert_eq!(fit_within((50, 40), SizeBound::Square(100)), (50, 40));
/// ```
pub fn fit_within(source: (u32, u32), bound: SizeBound) -> (u32, u32) {
    let (src_w, src_h) = source;
    let Some((max_w, max_h)) = bound.limits() else {
        return source;
    };

    let scale_w = max_w as f64 / src_w as f64;
    let scale_h = max_h as f64 / src_h as f64;
    let scale = scale_w.min(scale_h).min(1.0);

    let w = ((src_w as f64 * scale).round() as u32).max(1);
    let h = ((src_h as f64 * scale).round() as u32).max(1);
    (w, h)
}
